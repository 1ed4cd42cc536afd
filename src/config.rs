use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Base URL of the hosted embedding service used when no override is set.
pub const DEFAULT_API_BASE_URL: &str = "https://ai-embeddings.vercel.app";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the embedmem server.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the remote embedding/vector-search service.
    pub embedding_api_url: String,
    /// Optional request timeout applied to every collaborator call, in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            embedding_api_url: load_env_optional("EMBEDDING_API_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: load_env_optional("EMBEDDING_API_TIMEOUT_SECS")
                .map(|value| {
                    value.parse().map_err(|_| {
                        ConfigError::InvalidValue("EMBEDDING_API_TIMEOUT_SECS".to_string())
                    })
                })
                .transpose()?,
        })
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        embedding_api_url = %config.embedding_api_url,
        request_timeout_secs = ?config.request_timeout_secs,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults_and_validates_timeout() {
        // SAFETY: This is the only test touching these keys, so no other
        // thread observes the mutation.
        unsafe { env::remove_var("EMBEDDING_API_URL") };
        unsafe { env::remove_var("EMBEDDING_API_TIMEOUT_SECS") };
        let config = Config::from_env().expect("config loads without env vars");
        assert_eq!(config.embedding_api_url, DEFAULT_API_BASE_URL);
        assert!(config.request_timeout_secs.is_none());

        unsafe { env::set_var("EMBEDDING_API_TIMEOUT_SECS", "soon") };
        let error = Config::from_env().expect_err("timeout must be numeric");
        assert!(matches!(error, ConfigError::InvalidValue(ref key) if key.contains("TIMEOUT")));
        unsafe { env::remove_var("EMBEDDING_API_TIMEOUT_SECS") };
    }
}
