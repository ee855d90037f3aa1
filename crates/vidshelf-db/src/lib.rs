//! Vidshelf database layer.

pub mod db;

#[cfg(any(test, feature = "memory"))]
pub use db::InMemoryVideoStore;
pub use db::{run_migrations, VideoRepository, VideoStore, MIGRATOR};
