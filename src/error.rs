//! Error types for the ThunderMail API client.
//!
//! Only conditions with no recoverable HTTP response surface through this
//! type. API-level failures (non-2xx responses, malformed error bodies) are
//! captured in [`ApiResult`](crate::models::ApiResult) instead and are never
//! returned as an [`Error`].

use thiserror::Error;

/// A specialized `Result` type for ThunderMail operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all ThunderMail client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed before a response could be classified
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No API key was provided and none was found in the environment
    #[error(
        "Missing API key. Pass it to the constructor `ThunderMailClient::new(\"tim_123\")` \
         or set the THUNDERMAIL_API_KEY environment variable"
    )]
    MissingApiKey,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error originated in the transport layer,
    /// meaning no HTTP response was available to normalize.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if this error occurred before any network call was
    /// attempted (missing credential, invalid base URL, bad input).
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingApiKey | Error::Config(_) | Error::UrlParse(_) | Error::InvalidInput(_)
        )
    }
}
