//! MySQL connection pool construction.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use id_shared::config::DatabaseConfig;

/// Build a MySQL connection pool from configuration
///
/// Connects lazily where possible but verifies the first connection, so a
/// bad URL fails at startup rather than on the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creation_with_invalid_url() {
        let config = DatabaseConfig {
            url: "invalid://url".to_string(),
            connect_timeout: 5,
            ..DatabaseConfig::default()
        };

        let result = create_pool(&config).await;
        assert!(result.is_err());
    }
}
