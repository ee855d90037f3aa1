use crate::error::{ErrorResponse, HttpAppError, ValidatedPath, ValidatedQuery};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use vidshelf_core::models::{VideoListResponse, VideoQuery, VideoResponse};
use vidshelf_core::AppError;

#[utoipa::path(
    get,
    path = "/api/v0/videos",
    tag = "videos",
    params(
        VideoQuery
    ),
    responses(
        (status = 200, description = "Videos ordered by name", body = VideoListResponse),
        (status = 400, description = "Unreadable query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, pairs), fields(operation = "list_videos"))]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(pairs): ValidatedQuery<Vec<(String, String)>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let query = VideoQuery::from_pairs(pairs);
    let search_term = query.search_term();
    let videos = state.videos.list_videos(search_term).await?;

    tracing::debug!(count = videos.len(), search_term = ?search_term, "Listed videos");

    Ok(Json(VideoListResponse::new(
        videos,
        search_term.map(str::to_string),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v0/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 404, description = "Video not found or id is not a number", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_video"))]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state
        .videos
        .get_video(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(VideoResponse::from(video)))
}
