//! HTTP client and request executor for the ThunderMail API.
//!
//! This module provides the main entry point [`ThunderMailClient`].
//!
//! # Example
//!
//! ```no_run
//! use thundermail_rs::ThunderMailClient;
//!
//! # async fn example() -> thundermail_rs::Result<()> {
//! let client = ThunderMailClient::new("tim_123")?;
//! let result = client.emails().get(&"e9c5f8a2".into()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use http::{RequestOptions, ThunderMailClient};
pub(crate) use http::ClientInner;
