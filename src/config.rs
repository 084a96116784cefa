// Configuration management: literal defaults overridden by environment variables

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// Runtime settings, sourced from the environment with literal fallbacks.
///
/// Every variable is optional; a missing variable falls back to the default
/// documented on the matching field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// `PORT` - listen port, bound on 0.0.0.0 (default 3000)
    pub port: u16,
    /// `DB_HOST` (default "localhost")
    pub db_host: String,
    /// `DB_PORT` (default 5432)
    pub db_port: u16,
    /// `DB_USER` (default "onyxs")
    pub db_user: String,
    /// `DB_PASSWORD` (default "dev_password_123")
    pub db_password: String,
    /// `DB_NAME` (default "onyxs_fitness")
    pub db_name: String,
    /// `DB_MAX_CONNECTIONS` - pool size cap (default 10, the driver default)
    pub db_max_connections: u32,
    /// `DB_CONNECT_TIMEOUT_SECONDS` - pool acquire timeout (default 30, the driver default)
    pub db_connect_timeout_seconds: u64,
    /// `NODE_ENV` - deployment label, display only (default "development")
    pub node_env: String,
}

impl Settings {
    /// Load settings from process environment variables over the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::default())
    }

    /// Load settings from an explicit environment source.
    ///
    /// Tests pass `Environment::default().source(Some(map))` to stay
    /// independent of the process environment.
    pub fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("port", 3000_i64)?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_user", "onyxs")?
            .set_default("db_password", "dev_password_123")?
            .set_default("db_name", "onyxs_fitness")?
            .set_default("db_max_connections", 10_i64)?
            .set_default("db_connect_timeout_seconds", 30_i64)?
            .set_default("node_env", "development")?
            .add_source(env.try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.db_host.is_empty() {
            return Err("Database host cannot be empty".to_string());
        }
        if self.db_user.is_empty() {
            return Err("Database user cannot be empty".to_string());
        }
        if self.db_name.is_empty() {
            return Err("Database name cannot be empty".to_string());
        }
        if self.db_max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 3000,
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "onyxs".to_string(),
            db_password: "dev_password_123".to_string(),
            db_name: "onyxs_fitness".to_string(),
            db_max_connections: 10,
            db_connect_timeout_seconds: 30,
            node_env: "development".to_string(),
        }
    }
}
