//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DPR_ANALYZER` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! basic-mode service.
//!
//! # Example
//!
//! ```no_run
//! use dpr_analyzer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod engine;
mod error;
mod features;
mod models;
mod server;

pub use engine::EngineSettings;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use models::ModelsConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted model endpoints and the risk model file
    #[serde(default)]
    pub models: ModelsConfig,

    /// Pipeline tunables
    #[serde(default)]
    pub engine: EngineSettings,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DPR_ANALYZER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DPR_ANALYZER__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `DPR_ANALYZER__MODELS__SENTIMENT_ENDPOINT=...` -> `models.sentiment_endpoint = ...`
    /// - `DPR_ANALYZER__ENGINE__DELAY_MODEL=graduated` -> `engine.delay_model = graduated`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DPR_ANALYZER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.models.validate()?;
        self.engine.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Whether error responses may carry details. Always off in production.
    pub fn verbose_errors(&self) -> bool {
        self.features.verbose_errors && !self.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::DelayModel;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DPR_ANALYZER__SERVER__PORT",
        "DPR_ANALYZER__SERVER__ENVIRONMENT",
        "DPR_ANALYZER__SERVER__LOG_FORMAT",
        "DPR_ANALYZER__MODELS__SENTIMENT_ENDPOINT",
        "DPR_ANALYZER__MODELS__REQUIRE_ADVANCED",
        "DPR_ANALYZER__ENGINE__DELAY_MODEL",
        "DPR_ANALYZER__FEATURES__VERBOSE_ERRORS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.engine.delay_model, DelayModel::Standard);
        assert!(config.models.sentiment_endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DPR_ANALYZER__SERVER__PORT", "9100");
        env::set_var("DPR_ANALYZER__SERVER__LOG_FORMAT", "json");
        env::set_var("DPR_ANALYZER__MODELS__SENTIMENT_ENDPOINT", "http://localhost:9000/sentiment");
        env::set_var("DPR_ANALYZER__ENGINE__DELAY_MODEL", "graduated");
        env::set_var("DPR_ANALYZER__FEATURES__VERBOSE_ERRORS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(
            config.models.sentiment_endpoint.as_deref(),
            Some("http://localhost:9000/sentiment")
        );
        assert_eq!(config.engine.delay_model, DelayModel::Graduated);
        assert!(config.features.verbose_errors);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DPR_ANALYZER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_verbose_errors_forced_off_in_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DPR_ANALYZER__FEATURES__VERBOSE_ERRORS", "true");
        let development = AppConfig::load();
        env::set_var("DPR_ANALYZER__SERVER__ENVIRONMENT", "production");
        let production = AppConfig::load();
        clear_env();

        assert!(development.unwrap().verbose_errors());
        let production = production.unwrap();
        assert!(production.features.verbose_errors);
        assert!(!production.verbose_errors());
    }

    #[test]
    fn test_validate_rejects_required_advanced_without_endpoints() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DPR_ANALYZER__MODELS__REQUIRE_ADVANCED", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
