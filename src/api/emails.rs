//! Emails service for sending and retrieving messages.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOptions};
use crate::models::{ApiResult, Email, EmailId, SendEmailRequest, SendEmailResponse};
use crate::Result;

/// Service for email operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: thundermail_rs::ThunderMailClient) -> thundermail_rs::Result<()> {
/// use thundermail_rs::models::SendEmailRequest;
///
/// let email = SendEmailRequest::builder()
///     .from("Tim <tim@example.com>")
///     .to("a@b.com")
///     .subject("hi")
///     .html("<p>hi</p>")
///     .build()?;
///
/// let result = client.emails().send(email).await?;
/// if let Some(error) = result.error() {
///     eprintln!("send rejected: {}", error);
/// }
/// # Ok(())
/// # }
/// ```
pub struct EmailsService {
    inner: Arc<ClientInner>,
}

impl EmailsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Submit an email for delivery.
    ///
    /// Issues `POST /emails`. An API rejection (invalid payload, bad key)
    /// lands in the returned [`ApiResult`], never in the outer `Result`.
    pub async fn send(&self, email: SendEmailRequest) -> Result<ApiResult<SendEmailResponse>> {
        self.inner
            .post("/emails", &email, RequestOptions::default())
            .await
    }

    /// Submit an email with per-call overrides.
    pub async fn send_with_options(
        &self,
        email: SendEmailRequest,
        options: RequestOptions,
    ) -> Result<ApiResult<SendEmailResponse>> {
        self.inner.post("/emails", &email, options).await
    }

    /// Retrieve a previously submitted email by ID.
    ///
    /// Issues `GET /emails/{id}`.
    pub async fn get(&self, id: &EmailId) -> Result<ApiResult<Email>> {
        self.inner
            .get(&format!("/emails/{}", id), RequestOptions::default())
            .await
    }
}
