//! Application configuration
//!
//! Typed configuration loaded from environment variables with the `config`
//! and `dotenvy` crates. Variables use the `MIRROR_MIND` prefix and `__`
//! between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use mirror_mind::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MAX_LEEWAY_SECS, MIN_PRODUCTION_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL settings. Without them users are kept in memory.
    pub database: Option<DatabaseConfig>,

    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// A `.env` file is read first when present.
    ///
    /// - `MIRROR_MIND__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `MIRROR_MIND__DATABASE__URL=...` -> `database.url = ...`
    /// - `MIRROR_MIND__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a value
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MIRROR_MIND")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
