//! API service modules for ThunderMail endpoints.

mod emails;

pub use emails::EmailsService;
