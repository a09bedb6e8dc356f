//! Email payload and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::primitives::EmailId;

/// A new email to be submitted via `POST /emails`.
///
/// Use [`SendEmailBuilder`] for a convenient way to construct payloads.
///
/// # Example
///
/// ```
/// use thundermail_rs::models::SendEmailRequest;
///
/// let email = SendEmailRequest::builder()
///     .from("Tim <tim@example.com>")
///     .to("a@b.com")
///     .subject("hi")
///     .html("<p>hi</p>")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// Sender address, optionally with a display name (`"Tim <tim@x.com>"`)
    pub from: String,
    /// Recipient addresses
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    /// Blind carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    /// Reply-to addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    /// Custom message headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl SendEmailRequest {
    /// Start building a new email payload.
    pub fn builder() -> SendEmailBuilder {
        SendEmailBuilder::default()
    }
}

/// Builder for creating email payloads with validation.
#[derive(Debug, Default, Clone)]
pub struct SendEmailBuilder {
    from: Option<String>,
    to: Vec<String>,
    subject: Option<String>,
    html: Option<String>,
    text: Option<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    reply_to: Vec<String>,
    headers: HashMap<String, String>,
}

impl SendEmailBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Add a recipient address.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to.push(to.into());
        self
    }

    /// Set all recipient addresses at once.
    pub fn recipients(mut self, to: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.to = to.into_iter().map(Into::into).collect();
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain-text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a carbon-copy recipient.
    pub fn cc(mut self, cc: impl Into<String>) -> Self {
        self.cc.push(cc.into());
        self
    }

    /// Add a blind carbon-copy recipient.
    pub fn bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc.push(bcc.into());
        self
    }

    /// Add a reply-to address.
    pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to.push(reply_to.into());
        self
    }

    /// Add a custom message header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Build the payload, validating required fields.
    pub fn build(self) -> crate::Result<SendEmailRequest> {
        let from = self
            .from
            .ok_or_else(|| crate::Error::InvalidInput("from is required".to_string()))?;

        if self.to.is_empty() {
            return Err(crate::Error::InvalidInput(
                "at least one recipient is required".to_string(),
            ));
        }

        let subject = self
            .subject
            .ok_or_else(|| crate::Error::InvalidInput("subject is required".to_string()))?;

        if self.html.is_none() && self.text.is_none() {
            return Err(crate::Error::InvalidInput(
                "either html or text body is required".to_string(),
            ));
        }

        Ok(SendEmailRequest {
            from,
            to: self.to,
            subject,
            html: self.html,
            text: self.text,
            cc: (!self.cc.is_empty()).then_some(self.cc),
            bcc: (!self.bcc.is_empty()).then_some(self.bcc),
            reply_to: (!self.reply_to.is_empty()).then_some(self.reply_to),
            headers: (!self.headers.is_empty()).then_some(self.headers),
        })
    }
}

/// Response to a successful email submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    /// Identifier assigned to the accepted message
    pub id: EmailId,
}

/// A previously submitted email, as returned by `GET /emails/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    /// Message identifier
    pub id: EmailId,
    /// Sender address
    pub from: String,
    /// Recipient addresses
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// HTML body, if one was submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text body, if one was submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Submission timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
