//! Configuration validation
//!
//! Checks at startup that go beyond what `Config::validate` can see on its own.

use anyhow::Result;
use vidshelf_core::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.db_timeout_seconds == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.db_max_connections > 100 {
        tracing::warn!(
            db_max_connections = config.db_max_connections,
            "DB_MAX_CONNECTIONS is very high for a single instance"
        );
    }

    Ok(())
}
