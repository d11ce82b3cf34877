//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration.
///
/// Without a file path, defaults apply. The three secrets may be supplied
/// or overridden through the environment (`TMDB_API_KEY`,
/// `GUEST_ACCESS_CODE`, `SIGNUP_ACCESS_CODE`), which always wins over the
/// file so the file can be committed without them.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay secrets from the environment onto a loaded configuration.
pub fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(key) = std::env::var("TMDB_API_KEY") {
        config.upstream.api_key = key;
    }
    if let Ok(code) = std::env::var("GUEST_ACCESS_CODE") {
        config.access.guest_code = code;
    }
    if let Ok(code) = std::env::var("SIGNUP_ACCESS_CODE") {
        config.access.signup_code = code;
    }
}
