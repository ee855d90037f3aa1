//! Database repositories for the data access layer
//!
//! `VideoRepository` is the PostgreSQL implementation of [`VideoStore`];
//! `InMemoryVideoStore` implements the same contract without a database.

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod video;

#[cfg(any(test, feature = "memory"))]
pub use memory::InMemoryVideoStore;
pub use video::{VideoRepository, VideoStore};

use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use sqlx::PgPool;

/// Migrations from the workspace `migrations/` directory, embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");
    Ok(())
}
