use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Create the connection pool without opening a connection.
///
/// Connections are established on first acquire, so an unreachable database
/// never blocks startup.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect_lazy_with(options))
}

/// Ensure the `reports` and `report_images` tables exist.
///
/// Failures are logged and swallowed: the server keeps running without the
/// schema guarantee.
pub async fn ensure_schema(pool: &PgPool) -> bool {
    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            tracing::info!("Database schema is ready");
            true
        }
        Err(e) => {
            tracing::error!("Failed to ensure database schema: {}", e);
            false
        }
    }
}
