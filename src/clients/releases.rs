//! Releases resource client.

use std::sync::Arc;

use crate::clients::{list_from, page_size};
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::Release;

/// Client for release operations.
pub struct ReleasesClient {
    transport: Arc<dyn Transport>,
}

impl ReleasesClient {
    /// Create a new releases client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List releases of a repository, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or the request
    /// fails.
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Release>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/releases"))
                    .query("per_page", page_size(limit)),
            )
            .await?;
        list_from(value)
    }

    /// Get the latest published release.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the repository has no published
    /// release.
    pub async fn latest(&self, owner: &str, repo: &str) -> Result<Release, Error> {
        let value = self
            .transport
            .send(Request::new(
                Method::Get,
                format!("/repos/{owner}/{repo}/releases/latest"),
            ))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }
}
