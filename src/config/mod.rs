//! Configuration management for ticketpress
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use ticketpress::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `TICKETPRESS__<section>__<key>`
//!
//! Examples:
//! - `TICKETPRESS__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `TICKETPRESS__PRINT__SCRIPT_PATH=/config/print_ticket.sh`
//! - `TICKETPRESS__PRINT__TIMEOUT_SECS=10`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/ticketpress.toml`.
//! This can be overridden using the `TICKETPRESS_CONFIG` environment variable.
//!
//! Ticket templates live in their own settings file (see
//! [`crate::templates::TemplateStore`]); `[templates].settings_path` points
//! at it.

mod models;
mod sources;
mod validation;

// Re-export public types
pub use models::{Config, PrintConfig, ServerConfig, StateConfig, TemplatesConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`TICKETPRESS__*`)
    /// 2. TOML file (default: `config/ticketpress.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or the
    /// resulting values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[server]
bind_addr = "0.0.0.0:5005"
max_body_bytes = 65536

[print]
script_path = "config/print_ticket.sh"
timeout_secs = 30

[state]
counter_path = "config/state/ticket_counter"
ticket_log_path = "config/logs/tickets.log"

[templates]
settings_path = "config/templates.toml"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:5005");
        assert_eq!(config.print.timeout_secs, 30);
        assert_eq!(
            config.templates.settings_path.to_str().unwrap(),
            "config/templates.toml"
        );
    }

    #[test]
    fn test_validation_catches_zero_timeout() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[print]\ntimeout_secs = 0\n").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::InvalidPrintTimeout)
        ));
    }
}
