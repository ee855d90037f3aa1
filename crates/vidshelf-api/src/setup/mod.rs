//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidshelf_core::Config;
use vidshelf_db::VideoRepository;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(&config.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!(
        environment = %config.environment,
        app_name = %config.app_name,
        "Configuration loaded and validated successfully"
    );

    let pool = database::setup_database(&config).await?;

    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(VideoRepository::new(pool)),
    ));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
