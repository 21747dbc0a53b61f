pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseConfig;
use store::StoreError;

/// Build the process-wide connection pool. Called once at startup; the pool
/// is handed to the stores through AppState, never through a global.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let url = config
        .url
        .as_deref()
        .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(url)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    tracing::info!("Connected database pool ({} max connections)", config.max_connections);
    Ok(pool)
}
