//! The uniform success/error envelope returned by every API call.
//!
//! Every request that receives an HTTP response — success or failure — is
//! normalized into an [`ApiResult`]. Only transport-level faults (DNS,
//! refused connection, timeout) bypass this envelope and surface as
//! [`Error`](crate::Error) instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classification tag used when the API returns an error body that cannot
/// be parsed, or omits its own classification.
pub const APPLICATION_ERROR: &str = "application_error";

/// A structured API error: a classification tag plus human-readable detail.
///
/// # Example
///
/// ```
/// use thundermail_rs::models::ErrorResponse;
///
/// let err = ErrorResponse::new("unauthorized", "bad key");
/// assert_eq!(err.name, "unauthorized");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable classification tag (e.g. `"unauthorized"`)
    pub name: String,
    /// Human-readable detail
    pub message: String,
}

impl ErrorResponse {
    /// Create an error response from a tag and message.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an error with the default [`APPLICATION_ERROR`] tag.
    pub fn application_error(message: impl Into<String>) -> Self {
        Self::new(APPLICATION_ERROR, message)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Structural check for the recognized error schema.
///
/// Returns `true` when both `name` and `message` are present as strings.
/// This decides how an error body is reported, not whether it is accepted:
/// unrecognized shapes still pass through into an [`ErrorResponse`].
pub fn is_error_response(value: &Value) -> bool {
    value.get("name").is_some_and(Value::is_string)
        && value.get("message").is_some_and(Value::is_string)
}

/// Outcome of an API call that received an HTTP response.
///
/// Exactly one arm is ever populated: either the deserialized response body
/// or a normalized [`ErrorResponse`]. Check [`error`](ApiResult::error)
/// before trusting [`data`](ApiResult::data).
///
/// # Example
///
/// ```no_run
/// use thundermail_rs::{ApiResult, ThunderMailClient, models::SendEmailRequest};
///
/// # async fn example() -> thundermail_rs::Result<()> {
/// let client = ThunderMailClient::new("tim_123")?;
/// let email = SendEmailRequest::builder()
///     .from("Tim <tim@example.com>")
///     .to("a@b.com")
///     .subject("hi")
///     .html("<p>hi</p>")
///     .build()?;
///
/// match client.emails().send(email).await? {
///     ApiResult::Data(sent) => println!("sent: {}", sent.id),
///     ApiResult::Error(error) => eprintln!("rejected: {}", error),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    /// The call succeeded; holds the deserialized response body.
    Data(T),
    /// The API rejected the call; holds the normalized error.
    Error(ErrorResponse),
}

impl<T> ApiResult<T> {
    /// Returns `true` if the call succeeded.
    pub fn is_data(&self) -> bool {
        matches!(self, ApiResult::Data(_))
    }

    /// Returns `true` if the API returned an error.
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResult::Error(_))
    }

    /// The response data, if the call succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Data(data) => Some(data),
            ApiResult::Error(_) => None,
        }
    }

    /// The normalized error, if the API rejected the call.
    pub fn error(&self) -> Option<&ErrorResponse> {
        match self {
            ApiResult::Data(_) => None,
            ApiResult::Error(error) => Some(error),
        }
    }

    /// Consume the result, returning the data if the call succeeded.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Data(data) => Some(data),
            ApiResult::Error(_) => None,
        }
    }

    /// Consume the result, returning the error if the API rejected the call.
    pub fn into_error(self) -> Option<ErrorResponse> {
        match self {
            ApiResult::Data(_) => None,
            ApiResult::Error(error) => Some(error),
        }
    }

    /// Convert into a standard `Result`, treating the API error as `Err`.
    pub fn into_result(self) -> std::result::Result<T, ErrorResponse> {
        match self {
            ApiResult::Data(data) => Ok(data),
            ApiResult::Error(error) => Err(error),
        }
    }
}
