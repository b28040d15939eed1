//! Issues resource client.

use std::sync::Arc;

use serde_json::json;

use crate::clients::{list_from, page_size};
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::Issue;

/// Client for issue operations.
pub struct IssuesClient {
    transport: Arc<dyn Transport>,
}

impl IssuesClient {
    /// Create a new issues client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List issues of a repository.
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
    ) -> Result<Vec<Issue>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/issues"))
                    .query("state", state.unwrap_or("open"))
                    .query("per_page", page_size(limit)),
            )
            .await?;
        list_from(value)
    }

    /// Open a new issue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<Issue, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "create issues",
            });
        }

        let request_body = json!({ "title": title, "body": body });
        let value = self
            .transport
            .send(
                Request::new(Method::Post, format!("/repos/{owner}/{repo}/issues"))
                    .body(request_body),
            )
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }
}
