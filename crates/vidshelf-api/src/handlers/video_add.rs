use crate::constants::API_PREFIX;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use vidshelf_core::models::{NewVideo, VideoResponse};
use vidshelf_core::AppError;

#[utoipa::path(
    post,
    path = "/api/v0/videos",
    tag = "videos",
    request_body = NewVideo,
    responses(
        (status = 201, description = "Video added", body = VideoResponse),
        (status = 400, description = "Invalid form data or YouTube URL", body = ErrorResponse),
        (status = 409, description = "A video with the same YouTube id exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, new_video), fields(operation = "add_video"))]
pub async fn add_video(
    State(state): State<Arc<AppState>>,
    ValidatedJson(new_video): ValidatedJson<NewVideo>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = new_video.into_record().inspect_err(|e| {
        if let AppError::InvalidVideoUrl(url_err) = e {
            tracing::info!(url = %url_err.url(), error = %url_err, "Rejected video URL");
        }
    })?;

    let video = state.videos.create_video(record).await?;

    tracing::info!(id = video.id, video_id = %video.video_id, "Video added");

    let location = format!("{}/videos/{}", API_PREFIX, video.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VideoResponse::from(video)),
    ))
}
