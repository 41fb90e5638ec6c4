use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::{
    API_URL_ENV_VAR, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, TIMEOUT_ENV_VAR,
    USER_AGENT as USER_AGENT_VALUE,
};

// Include the generated client code
#[allow(clippy::use_self)]
#[allow(clippy::pedantic)]
#[allow(clippy::nursery)]
#[allow(missing_docs)]
#[allow(unused_imports)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/codebreaker_client.rs"));
}

// Re-export from the generated module
pub use generated::*;

// Re-export the generated types module and its submodules for easier access
pub use generated::types;
pub use generated::types::error;

/// Configuration for the Codebreaker API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the service, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

/// Create a configured Codebreaker API client
pub fn create_client(config: ApiConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    let http_client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(config.timeout)
        .build()?;

    Ok(Client::new_with_client(
        config.base_url.trim_end_matches('/'),
        http_client,
    ))
}

/// Helper function to create client from environment variables
pub fn create_client_from_env() -> Result<Client> {
    create_client(resolve_api_config(
        std::env::var(API_URL_ENV_VAR).ok(),
        std::env::var(TIMEOUT_ENV_VAR).ok(),
    ))
}

/// Build an [`ApiConfig`] from optional raw overrides, falling back to defaults
///
/// An empty URL or a timeout that is not a positive number of seconds is
/// ignored.
pub fn resolve_api_config(base_url: Option<String>, timeout_secs: Option<String>) -> ApiConfig {
    let defaults = ApiConfig::default();

    let base_url = base_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or(defaults.base_url);

    let timeout = match timeout_secs.as_deref().map(str::trim) {
        None => defaults.timeout,
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                tracing::warn!(
                    "Ignoring invalid {} value '{}', using {}s",
                    TIMEOUT_ENV_VAR,
                    raw,
                    DEFAULT_API_TIMEOUT_SECS
                );
                defaults.timeout
            }
        },
    };

    ApiConfig { base_url, timeout }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_from_env() {
        assert!(create_client_from_env().is_ok());
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_api_config(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_overrides() {
        let config = resolve_api_config(
            Some(" https://games.example.com/api ".to_string()),
            Some("5".to_string()),
        );
        assert_eq!(config.base_url, "https://games.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_ignores_blank_url_and_bad_timeout() {
        let config = resolve_api_config(Some("   ".to_string()), Some("soon".to_string()));
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));

        let config = resolve_api_config(None, Some("0".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    }
}
