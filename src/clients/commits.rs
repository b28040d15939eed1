//! Commits resource client.

use std::sync::Arc;

use crate::clients::{list_from, page_size};
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::Commit;

/// Client for commit history operations.
pub struct CommitsClient {
    transport: Arc<dyn Transport>,
}

impl CommitsClient {
    /// Create a new commits client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List the most recent commits of a repository.
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
    ) -> Result<Vec<Commit>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/commits"))
                    .query("per_page", page_size(limit)),
            )
            .await?;
        list_from(value)
    }

    /// Get the most recent commit, or `None` for an empty repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or the request
    /// fails.
    pub async fn latest(&self, owner: &str, repo: &str) -> Result<Option<Commit>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/commits"))
                    .query("per_page", 1),
            )
            .await?;
        let mut commits: Vec<Commit> = list_from(value)?;
        Ok(if commits.is_empty() {
            None
        } else {
            Some(commits.remove(0))
        })
    }
}
