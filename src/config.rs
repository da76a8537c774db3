use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Process-level settings for the analysis service.
///
/// Only the credential is read from the environment; the rest are fixed
/// defaults that tests override directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        Ok(Self::with_api_key(api_key))
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_a_startup_error() {
        let result = Config::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingCredential)));
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let result = Config::from_lookup(|_| Some("   ".to_string()));
        assert!(matches!(result, Err(ConfigError::MissingCredential)));
    }

    #[test]
    fn credential_is_read_from_api_key_only() {
        let config = Config::from_lookup(|key| (key == API_KEY_VAR).then(|| " secret ".to_string()))
            .expect("credential should resolve");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn missing_credential_message_names_the_variable() {
        let message = ConfigError::MissingCredential.to_string();
        assert!(message.contains("API_KEY"));
    }
}
