use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("print.timeout_secs must be positive")]
    InvalidPrintTimeout,

    #[error("server.max_body_bytes must be positive")]
    InvalidMaxBodyBytes,

    #[error("print.script_path must not be empty")]
    EmptyScriptPath,

    #[error("state.counter_path must not be empty")]
    EmptyCounterPath,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.print.timeout_secs == 0 {
        return Err(ValidationError::InvalidPrintTimeout);
    }

    if config.server.max_body_bytes == 0 {
        return Err(ValidationError::InvalidMaxBodyBytes);
    }

    if config.print.script_path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyScriptPath);
    }

    if config.state.counter_path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyCounterPath);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.print.timeout_secs = 0;

        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidPrintTimeout)
        ));
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let mut config = Config::default();
        config.server.max_body_bytes = 0;

        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidMaxBodyBytes)
        ));
    }
}
