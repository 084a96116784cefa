// PostgreSQL connection pool implementation

use crate::config::Settings;
use crate::errors::DatabaseError;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper
///
/// The pool is created lazily: construction never touches the network, so
/// the service starts and serves `/health` even when the database is down.
/// The first connection is opened by the first query.
#[derive(Debug, Clone)]
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Create a new lazy connection pool from the configured connection
    /// parameters.
    #[instrument(skip(config), fields(host = %config.db_host, database = %config.db_name))]
    pub fn new(config: &Settings) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name);

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout_seconds))
            .connect_lazy_with(options);

        info!(
            max_connections = config.db_max_connections,
            "Database connection pool initialized"
        );

        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Current server time, used by the startup connectivity probe.
    ///
    /// # Errors
    /// Returns `DatabaseError` when no connection can be acquired or the
    /// query fails.
    #[instrument(skip(self))]
    pub async fn server_time(&self) -> Result<DateTime<Utc>, DatabaseError> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }

    /// Server product and version string, e.g.
    /// `PostgreSQL 16.2 on x86_64-pc-linux-gnu, ...`.
    ///
    /// # Errors
    /// Returns `DatabaseError` when no connection can be acquired or the
    /// query fails.
    #[instrument(skip(self))]
    pub async fn server_version(&self) -> Result<String, DatabaseError> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lazy_pool_creation_needs_no_database() {
        let pool = DbPool::new(&Settings::default());
        assert!(!pool.pool().is_closed());
    }

    #[tokio::test]
    async fn test_queries_against_unreachable_database_fail() {
        let config = Settings {
            db_host: "127.0.0.1".to_string(),
            db_port: 1,
            db_connect_timeout_seconds: 2,
            ..Settings::default()
        };

        let pool = DbPool::new(&config);
        let result = pool.server_version().await;
        assert!(result.is_err());
        assert!(!result.unwrap_err().to_string().is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires running PostgreSQL instance
    async fn test_server_time() {
        let pool = DbPool::new(&Settings::default());
        let result = pool.server_time().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires running PostgreSQL instance
    async fn test_server_version_reports_postgres() {
        let pool = DbPool::new(&Settings::default());
        let version = pool.server_version().await.unwrap();
        assert!(version.contains("PostgreSQL"));
    }
}
