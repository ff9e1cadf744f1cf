//! MySQL connection pool construction.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use rb_shared::config::database::DatabaseConfig;

/// Builds a MySQL connection pool from configuration
///
/// Connectivity is verified eagerly with a ping so a bad URL fails at
/// startup rather than on the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to MySQL"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!("MySQL connection pool ready");
    Ok(pool)
}
