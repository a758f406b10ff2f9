//! Environment-driven configuration for the completion-API client.

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenAI-compatible API, without the
    /// `/chat/completions` suffix.
    pub api_url: String,
    pub model: String,
    /// Fallback credential; the key store takes precedence when a user
    /// has one stored.
    pub api_key: Option<String>,
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {0}")]
    MissingVars(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl Config {
    /// Build a config from the environment, falling back to defaults
    /// for anything unset. `API_KEY` stays optional here; whether a
    /// credential is required is the caller's decision.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let request_timeout_seconds = match std::env::var("REQUEST_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT_SECONDS".to_string(),
                value: raw,
            })?,
            Err(_) => defaults.request_timeout_seconds,
        };

        Ok(Self {
            api_url: std::env::var("API_URL").unwrap_or(defaults.api_url),
            model: std::env::var("MODEL").unwrap_or(defaults.model),
            api_key: std::env::var("API_KEY").ok(),
            request_timeout_seconds,
        })
    }
}

/// Check that the variables the elaborate flow needs are all present,
/// reporting every missing one at once.
pub fn validate_environment() -> Result<(), ConfigError> {
    let required = ["API_URL", "MODEL", "API_KEY"];
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|var| std::env::var(var).is_err())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingVars(missing.join(", ")))
    }
}
