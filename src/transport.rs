//! HTTP transport layer.
//!
//! [`HttpTransport`] issues requests against a fixed base URL with the
//! GitHub default headers and maps non-2xx responses and network failures
//! into typed [`Error`]s. Resource clients depend on the [`Transport`]
//! trait rather than the concrete type so tests can drive them through
//! [`crate::testing::MockTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::Error;

/// Default base URL for the GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Media type sent in the `Accept` header on every request.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// HTTP method of a gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A single request against the remote API, built by a resource client.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/repos/{owner}/{repo}/branches`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    /// Create a request with no query parameters and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Seam between resource clients and the HTTP stack.
///
/// The trait is dyn-compatible so clients can hold `Arc<dyn Transport>`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whether a bearer credential is configured.
    ///
    /// Write operations check this before issuing any network call.
    fn has_credential(&self) -> bool;

    /// Issue the request and return the decoded JSON body.
    ///
    /// A 2xx response with an empty body decodes to [`Value::Null`].
    async fn send(&self, request: Request) -> Result<Value, Error>;
}

/// Transport backed by [`reqwest`].
///
/// Holds the fixed base URL and the optional bearer token; both are
/// immutable for the lifetime of the transport. There is no retry,
/// rate-limit handling, or caching at this layer.
pub struct HttpTransport {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpTransport {
    /// Create a new transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        // An empty token means "no credential", matching how the token is
        // usually injected from an optional environment variable.
        let token = token.filter(|t| !t.is_empty());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-2xx response to a typed error.
    async fn error_for(response: reqwest::Response) -> Error {
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| format!("HTTP {}", status.as_u16()), String::from);

        if status == StatusCode::NOT_FOUND {
            Error::NotFound { resource: message }
        } else {
            Error::Rejected {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    async fn send(&self, request: Request) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };

        builder = builder.header("Accept", ACCEPT_MEDIA_TYPE);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = ?request.method, path = %request.path, "sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = Self::error_for(response).await;
            tracing::warn!(path = %request.path, status = status.as_u16(), %error, "request failed");
            return Err(error);
        }

        // 204 and other bodyless successes decode to null.
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| Error::Transport(format!("undecodable response body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(token: Option<&str>) -> HttpTransport {
        HttpTransport::new(
            DEFAULT_BASE_URL,
            token.map(String::from),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
        .expect("transport creation should succeed")
    }

    #[test]
    fn base_url_is_trimmed() {
        let t = HttpTransport::new(
            "https://github.example.com/api/",
            None,
            Duration::from_secs(5),
        )
        .expect("transport creation should succeed");
        assert_eq!(t.base_url(), "https://github.example.com/api");
    }

    #[test]
    fn empty_token_counts_as_no_credential() {
        assert!(!transport(None).has_credential());
        assert!(!transport(Some("")).has_credential());
        assert!(transport(Some("ghp_abc")).has_credential());
    }

    #[test]
    fn request_builder_accumulates_query_and_body() {
        let request = Request::new(Method::Get, "/repos/a/b/commits")
            .query("per_page", 10)
            .query("state", "open")
            .body(serde_json::json!({"k": "v"}));

        assert_eq!(request.path, "/repos/a/b/commits");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[0], ("per_page".to_string(), "10".to_string()));
        assert!(request.body.is_some());
    }
}
