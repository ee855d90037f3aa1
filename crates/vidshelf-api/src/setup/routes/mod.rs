//! Route configuration and setup.
//!
//! Video routes live in [domains](domains); health checks in [health](health).

mod domains;
mod health;

use crate::error::ErrorResponse;
use crate::middleware::{
    request_id_middleware, security_headers_middleware, SecurityHeadersConfig,
};
use crate::state::AppState;
use axum::{
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use vidshelf_core::Config;

use crate::constants::MAX_BODY_BYTES;

/// Build the application router with every middleware layer attached.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let security_headers_config = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    let request_timeout = Duration::from_secs(config.request_timeout_secs.max(1));
    tracing::info!(
        request_timeout_secs = request_timeout.as_secs(),
        "Request timeout layer enabled"
    );

    let app = public_routes()
        .merge(domains::video_routes())
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(request_timeout),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn_with_state(
            security_headers_config,
            security_headers_middleware,
        ))
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}

async fn handle_timeout_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request timed out");
        let body = ErrorResponse {
            error: "Request timed out".to_string(),
            details: None,
            error_type: None,
            code: "REQUEST_TIMEOUT".to_string(),
            recoverable: true,
            suggested_action: Some("Retry after a short delay".to_string()),
        };
        return (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response();
    }

    tracing::error!(error = %err, "Unhandled middleware error");
    let body = ErrorResponse {
        error: "Internal server error".to_string(),
        details: None,
        error_type: None,
        code: "INTERNAL_ERROR".to_string(),
        recoverable: true,
        suggested_action: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(crate::handlers::home::home))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
}
