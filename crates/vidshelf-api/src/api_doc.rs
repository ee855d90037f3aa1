//! OpenAPI documentation.
//! Handler path annotations spell out `/api/v0`; keep them in step with
//! `crate::constants::API_PREFIX`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vidshelf_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidshelf API",
        version = "0.1.0",
        description = "Catalogue of YouTube video links. Videos are added by watch URL, listed alphabetically with optional name search, and shown individually with an embeddable player URL. Resource endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::home::home,
        handlers::video_add::add_video,
        handlers::video_get::list_videos,
        handlers::video_get::get_video,
    ),
    components(
        schemas(
            models::HomeResponse,
            models::VideoQuery,
            models::NewVideo,
            models::VideoResponse,
            models::VideoListResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "home", description = "Catalogue landing information"),
        (name = "videos", description = "Add, list, search, and show videos")
    )
)]
pub struct ApiDoc;
