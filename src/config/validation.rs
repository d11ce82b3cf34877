//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream base URL and bind addresses actually parse
//! - Reject empty secrets before the server starts serving with them
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug)]
pub enum ValidationError {
    MissingApiKey,
    EmptyAccessCode(&'static str),
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    InvalidBaseUrl(String),
    ZeroRequestTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingApiKey => {
                write!(f, "upstream.api_key is empty (set it or TMDB_API_KEY)")
            }
            ValidationError::EmptyAccessCode(which) => {
                write!(f, "access.{} is empty", which)
            }
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a socket address", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address '{}' is not a socket address", addr)
            }
            ValidationError::InvalidBaseUrl(url) => {
                write!(f, "upstream.base_url '{}' is not a valid URL", url)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
        }
    }
}

/// Check a loaded configuration for semantic problems, collecting every
/// error rather than stopping at the first.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.upstream.api_key.is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    if config.upstream.base_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidBaseUrl(config.upstream.base_url.clone()));
    }

    if config.access.guest_code.is_empty() {
        errors.push(ValidationError::EmptyAccessCode("guest_code"));
    }
    if config.access.signup_code.is_empty() {
        errors.push(ValidationError::EmptyAccessCode("signup_code"));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.upstream.api_key = "test-key".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = valid_config();
        config.upstream.api_key.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MissingApiKey));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = valid_config();
        config.upstream.api_key.clear();
        config.upstream.base_url = "not a url".to_string();
        config.listener.bind_address = "nowhere".to_string();
        config.access.guest_code.clear();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::ZeroRequestTimeout));
    }
}
