//! HTTP client implementation for the ThunderMail API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::api::EmailsService;
use crate::models::{is_error_response, ApiResult, ErrorResponse};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the ThunderMail API.
///
/// The client resolves its API key and base address once at construction
/// and holds them immutably for its lifetime. It is cheaply cloneable and
/// may be shared across tasks; independent calls need no coordination.
///
/// # Example
///
/// ```no_run
/// use thundermail_rs::{ThunderMailClient, models::SendEmailRequest};
///
/// # async fn example() -> thundermail_rs::Result<()> {
/// let client = ThunderMailClient::new("tim_123")?;
///
/// let email = SendEmailRequest::builder()
///     .from("Tim <tim@example.com>")
///     .to("a@b.com")
///     .subject("hi")
///     .html("<p>hi</p>")
///     .build()?;
///
/// let result = client.emails().send(email).await?;
/// if let Some(sent) = result.data() {
///     println!("sent: {}", sent.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ThunderMailClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: SecretString,
    pub(crate) base_url: String,
}

/// Per-call overrides merged over the client defaults.
///
/// Caller-supplied values win: an explicit method replaces the operation's
/// default, extra headers replace same-named defaults, and a timeout
/// overrides the client-wide one for this call only.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// Override the HTTP method chosen by the calling operation
    pub method: Option<Method>,
    /// Extra headers; same-named defaults are replaced
    pub headers: HeaderMap,
    /// Per-call timeout, overriding the client-wide timeout
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty options (no overrides).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add a header, replacing any same-named default.
    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set a per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ThunderMailClient {
    /// Create a client with an explicit API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_api_key(api_key))
    }

    /// Create a client configured entirely from the environment
    /// (`THUNDERMAIL_API_KEY`, `THUNDERMAIL_BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] before any network call when the
    /// key is absent.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from an explicit configuration.
    ///
    /// Resolution (explicit > environment > default) happens here, once;
    /// the resolved values are stored on the client instance.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        let base_url = config.resolve_base_url()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                api_key,
                base_url,
            }),
        })
    }

    /// Get the emails service.
    pub fn emails(&self) -> EmailsService {
        EmailsService::new(self.inner.clone())
    }

    /// The resolved base address requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Issue a POST with a JSON body to `<base><path>`.
    ///
    /// Thin wrapper over the request executor: sets the method and
    /// delegates. Every outcome with an HTTP response lands in the
    /// [`ApiResult`]; only transport faults surface as [`Error`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<ApiResult<T>> {
        self.inner.post(path, body, options).await
    }

    /// Issue a GET to `<base><path>`.
    ///
    /// Same contract as [`post`](Self::post), without a body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResult<T>> {
        self.inner.get(path, options).await
    }
}

impl ClientInner {
    /// Build request headers with authentication.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let bearer = format!("Bearer {}", self.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResult<T>> {
        self.execute::<T, ()>(Method::GET, path, None, options).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<ApiResult<T>> {
        self.execute(Method::POST, path, Some(body), options).await
    }

    /// Perform one HTTP call and translate every outcome that carries a
    /// response into an [`ApiResult`].
    ///
    /// Transport failures (DNS, refused connection, timeout) propagate as
    /// [`Error::Http`]; there is no response to classify. A 2xx body that
    /// fails to deserialize propagates as [`Error::Json`].
    async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<ApiResult<T>> {
        let method = options.method.unwrap_or(method);
        let url = format!("{}{}", self.base_url, path);

        let mut headers = self.build_headers()?;
        headers.extend(options.headers);

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            let data = serde_json::from_str(&text)?;
            return Ok(ApiResult::Data(data));
        }

        Ok(ApiResult::Error(normalize_error(status, &text)))
    }
}

/// Map a non-2xx response body into an [`ErrorResponse`].
///
/// A parseable JSON body passes through permissively, whatever its shape;
/// missing fields fall back to the synthesized defaults. An unparseable
/// body yields the default tag with the parse failure as the message, or
/// the HTTP status text when there is no body to speak of. `name` is never
/// replaced by a parse failure, only `message`.
fn normalize_error(status: StatusCode, text: &str) -> ErrorResponse {
    let fallback =
        ErrorResponse::application_error(status.canonical_reason().unwrap_or("Unknown Error"));

    match serde_json::from_str::<Value>(text) {
        Ok(body) => {
            if is_error_response(&body) {
                tracing::debug!(status = status.as_u16(), "API returned a structured error");
            } else {
                tracing::warn!(
                    status = status.as_u16(),
                    "API error body does not match the recognized schema"
                );
            }
            ErrorResponse {
                name: body
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or(fallback.name),
                message: body
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or(fallback.message),
            }
        }
        Err(err) if !text.trim().is_empty() => {
            tracing::warn!(
                status = status.as_u16(),
                "failed to parse API error body as JSON"
            );
            ErrorResponse {
                message: err.to_string(),
                ..fallback
            }
        }
        Err(_) => fallback,
    }
}

impl Clone for ThunderMailClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for ThunderMailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThunderMailClient")
            .field("base_url", &self.inner.base_url)
            .finish()
    }
}
