use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use vidshelf_core::models::HomeResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Catalogue title", body = HomeResponse)
    )
)]
pub async fn home(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HomeResponse {
        app_name: state.config.app_name.clone(),
    })
}
