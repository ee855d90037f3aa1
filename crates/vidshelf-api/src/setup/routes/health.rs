//! Health check handlers and response types.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<i64>,
    pub version: &'static str,
}

/// Ping the store; "healthy", "timeout", or "unhealthy: {error}".
async fn check_store(state: &AppState) -> String {
    match tokio::time::timeout(CHECK_TIMEOUT, state.videos.ping()).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database health check failed");
            format!("unhealthy: {}", e)
        }
        Err(_) => {
            tracing::error!("Database health check timed out");
            "timeout".to_string()
        }
    }
}

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the database answers.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database = check_store(&state).await;
    let ready = database == "healthy";

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status = if ready { "ready" } else { "not_ready" };

    (
        status_code,
        Json(serde_json::json!({ "status": status, "database": database })),
    )
}

/// Full health check with catalogue size.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database = check_store(&state).await;
    let healthy = database == "healthy";

    let videos = if healthy {
        state.videos.count_videos().await.ok()
    } else {
        None
    };

    let response = HealthCheckResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        database,
        videos,
        version: env!("CARGO_PKG_VERSION"),
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
