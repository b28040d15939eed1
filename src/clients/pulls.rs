//! Pull requests resource client.

use std::sync::Arc;

use serde_json::json;

use crate::clients::{list_from, page_size};
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::PullRequest;

/// Client for pull request operations.
pub struct PullsClient {
    transport: Arc<dyn Transport>,
}

impl PullsClient {
    /// Create a new pulls client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List pull requests of a repository.
    ///
    /// `state` is "open", "closed" or "all"; absent means "open".
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or the request
    /// fails.
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        state: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<PullRequest>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/pulls"))
                    .query("state", state.unwrap_or("open"))
                    .query("per_page", page_size(limit)),
            )
            .await?;
        list_from(value)
    }

    /// Open a pull request from `head` into `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential, or
    /// [`Error::Rejected`] if the branches cannot be compared.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        head: &str,
        base: &str,
        body: &str,
    ) -> Result<PullRequest, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "create pull requests",
            });
        }

        let request_body = json!({
            "title": title,
            "head": head,
            "base": base,
            "body": body,
        });
        let value = self
            .transport
            .send(
                Request::new(Method::Post, format!("/repos/{owner}/{repo}/pulls"))
                    .body(request_body),
            )
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }
}
