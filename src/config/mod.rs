//! Application configuration module
//!
//! Configuration is read from environment variables with the `DATA_CHAT`
//! prefix, using `__` between nested keys. A `.env` file is honoured in
//! development. Every key has a default, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use data_chat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.backend.base_url);
//! ```

mod backend;
mod chat;
mod error;
mod logging;

pub use backend::BackendConfig;
pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analytics REST API
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat pacing
    #[serde(default)]
    pub chat: ChatConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `DATA_CHAT__BACKEND__BASE_URL=http://host:8000` -> `backend.base_url`
    /// - `DATA_CHAT__CHAT__THINKING_DELAY_MS=0` -> `chat.thinking_delay_ms`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DATA_CHAT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        self.chat.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "DATA_CHAT__BACKEND__BASE_URL",
        "DATA_CHAT__BACKEND__TIMEOUT_SECS",
        "DATA_CHAT__CHAT__THINKING_DELAY_MS",
        "DATA_CHAT__LOGGING__LEVEL",
        "DATA_CHAT__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.chat.thinking_delay_ms, 500);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DATA_CHAT__BACKEND__BASE_URL", "http://analytics:9000");
        env::set_var("DATA_CHAT__BACKEND__TIMEOUT_SECS", "5");
        env::set_var("DATA_CHAT__CHAT__THINKING_DELAY_MS", "0");
        env::set_var("DATA_CHAT__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.backend.base_url, "http://analytics:9000");
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.chat.thinking_delay_ms, 0);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_reports_bad_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DATA_CHAT__BACKEND__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_unparsable_value_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DATA_CHAT__CHAT__THINKING_DELAY_MS", "soon");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
