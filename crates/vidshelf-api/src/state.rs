//! Application state shared by all handlers.

use std::sync::Arc;
use vidshelf_core::Config;
use vidshelf_db::VideoStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
}

impl AppState {
    pub fn new(config: Config, videos: Arc<dyn VideoStore>) -> Self {
        Self { config, videos }
    }
}
