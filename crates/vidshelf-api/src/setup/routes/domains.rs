//! Video catalogue routes.

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn video_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            get(handlers::video_get::list_videos).post(handlers::video_add::add_video),
        )
        .route(
            &format!("{}/videos/{{id}}", API_PREFIX),
            get(handlers::video_get::get_video),
        )
}
