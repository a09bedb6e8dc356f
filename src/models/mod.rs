//! Data models for the ThunderMail API.
//!
//! - [`primitives`] - Core types like [`EmailId`]
//! - [`response`] - The [`ApiResult`] envelope and [`ErrorResponse`]
//! - [`email`] - Email payload and response models

pub mod email;
pub mod primitives;
pub mod response;

// Re-export commonly used types
pub use email::*;
pub use primitives::*;
pub use response::*;
