//! Client configuration options.
//!
//! Configuration is resolved exactly once, at construction, with the
//! precedence explicit argument > environment variable > default. The
//! resolved values live on the client instance; nothing is read from the
//! process environment after construction.

use secrecy::SecretString;
use std::env;
use std::time::Duration;
use url::Url;

use crate::{Error, Result};

/// Production API address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://thundermail.thepradipvc.com/api/v1";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "THUNDERMAIL_API_KEY";

/// Environment variable consulted for the base address.
pub const BASE_URL_ENV: &str = "THUNDERMAIL_BASE_URL";

/// Configuration for the ThunderMail client.
///
/// # Example
///
/// ```
/// use thundermail_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_api_key("tim_123")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit API key; falls back to [`API_KEY_ENV`] when unset
    pub api_key: Option<SecretString>,
    /// Explicit base address; falls back to [`BASE_URL_ENV`], then
    /// [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,
    /// Request timeout applied to the underlying HTTP client
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("thundermail-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key explicitly, taking precedence over the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the base address explicitly, taking precedence over the
    /// environment and the production default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve the API key: explicit argument > environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when neither source provides a
    /// non-empty key.
    pub(crate) fn resolve_api_key(&self) -> Result<SecretString> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        match env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(SecretString::from(key)),
            _ => Err(Error::MissingApiKey),
        }
    }

    /// Resolve the base address: explicit argument > environment > default.
    ///
    /// The address is validated as a URL and returned with any trailing
    /// slash removed, so paths like `/emails` append cleanly.
    pub(crate) fn resolve_base_url(&self) -> Result<String> {
        let raw = match &self.base_url {
            Some(url) => url.clone(),
            None => match env::var(BASE_URL_ENV) {
                Ok(url) if !url.is_empty() => url,
                _ => DEFAULT_BASE_URL.to_string(),
            },
        };
        Url::parse(&raw)?;
        Ok(raw.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.user_agent.starts_with("thundermail-rs/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("my-app/1.0");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "my-app/1.0");
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = ClientConfig::new().with_api_key("tim_explicit");
        let key = config.resolve_api_key().unwrap();
        assert_eq!(key.expose_secret(), "tim_explicit");
    }

    #[test]
    fn test_explicit_base_url_wins_over_default() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080/api/v1");
        assert_eq!(
            config.resolve_base_url().unwrap(),
            "http://localhost:8080/api/v1"
        );
    }

    #[test]
    fn test_base_url_defaults_to_production() {
        // BASE_URL_ENV is not set in the test environment
        let config = ClientConfig::default();
        assert_eq!(config.resolve_base_url().unwrap(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080/api/v1/");
        assert_eq!(
            config.resolve_base_url().unwrap(),
            "http://localhost:8080/api/v1"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::new().with_base_url("not a url");
        assert!(config.resolve_base_url().is_err());
    }

    #[test]
    fn test_secret_key_redacted_in_debug() {
        let config = ClientConfig::new().with_api_key("tim_123");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("tim_123"));
    }
}
