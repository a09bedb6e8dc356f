//! # thundermail-rs
//!
//! A Rust client for the ThunderMail transactional email API.
//!
//! This crate wraps the ThunderMail HTTP API in a small, strongly-typed
//! async client: it authenticates requests, serializes JSON payloads, and
//! normalizes every response — success, API error, or malformed error body —
//! into a single uniform [`ApiResult`](models::ApiResult) shape.
//!
//! ## Features
//!
//! - **Uniform outcomes**: every call with an HTTP response yields an
//!   [`ApiResult`](models::ApiResult) holding either data or a structured
//!   [`ErrorResponse`](models::ErrorResponse); only transport faults are
//!   returned as errors
//! - **Typed payloads**: validated email construction via
//!   [`SendEmailBuilder`](models::SendEmailBuilder)
//! - **Explicit configuration**: API key and base address resolved once at
//!   construction, explicit argument > environment > default
//! - **Async-first**: built on `reqwest`/Tokio; independent calls run
//!   concurrently without coordination
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use thundermail_rs::{ThunderMailClient, models::SendEmailRequest};
//!
//! #[tokio::main]
//! async fn main() -> thundermail_rs::Result<()> {
//!     // Reads THUNDERMAIL_API_KEY (and THUNDERMAIL_BASE_URL, if set)
//!     let client = ThunderMailClient::from_env()?;
//!
//!     let email = SendEmailRequest::builder()
//!         .from("Tim <tim@example.com>")
//!         .to("a@b.com")
//!         .subject("hi")
//!         .html("<p>hi</p>")
//!         .build()?;
//!
//!     match client.emails().send(email).await?.into_result() {
//!         Ok(sent) => println!("sent: {}", sent.id),
//!         Err(error) => eprintln!("rejected: {}", error),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error model
//!
//! Three layers, strictly separated:
//!
//! 1. Construction-time faults (missing API key, invalid base URL) fail the
//!    constructor before any network call.
//! 2. Transport faults (DNS, refused connection, timeout) surface as
//!    [`Error::Http`] from the call itself.
//! 3. Everything that produced an HTTP response — any status, any body — is
//!    captured in the [`ApiResult`](models::ApiResult), never thrown.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, RequestOptions, ThunderMailClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{ApiResult, EmailId, ErrorResponse};

/// Prelude module for convenient imports.
///
/// ```rust
/// use thundermail_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::EmailsService;
    pub use crate::client::{ClientConfig, RequestOptions, ThunderMailClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ApiResult, Email, EmailId, ErrorResponse, SendEmailBuilder, SendEmailRequest,
        SendEmailResponse,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_id_creation() {
        let id = EmailId::new("e9c5f8a2");
        assert_eq!(id.as_str(), "e9c5f8a2");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(
            DEFAULT_BASE_URL,
            "https://thundermail.thepradipvc.com/api/v1"
        );
    }

    #[test]
    fn test_client_is_cheaply_cloneable() {
        let client = ThunderMailClient::new("tim_123").unwrap();
        let clone = client.clone();
        assert_eq!(client.base_url(), clone.base_url());
    }
}
