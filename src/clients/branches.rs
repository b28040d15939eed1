//! Branches resource client.
//!
//! Branch creation is a composite transaction: resolve the source branch
//! head, create the ref, then re-fetch the new branch. Steps run strictly
//! in order and a failure aborts the remaining steps; there is no rollback
//! if the ref is created but the final fetch fails.

use std::sync::Arc;

use serde_json::json;

use crate::clients::list_from;
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::{Branch, RefCreated};

/// Client for branch operations.
pub struct BranchesClient {
    transport: Arc<dyn Transport>,
}

impl BranchesClient {
    /// Create a new branches client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List all branches of a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or the request
    /// fails.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, Error> {
        let value = self
            .transport
            .send(Request::new(
                Method::Get,
                format!("/repos/{owner}/{repo}/branches"),
            ))
            .await?;
        list_from(value)
    }

    /// Get a single branch by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the branch does not exist.
    pub async fn get(&self, owner: &str, repo: &str, name: &str) -> Result<Branch, Error> {
        let value = self
            .transport
            .send(Request::new(
                Method::Get,
                format!("/repos/{owner}/{repo}/branches/{name}"),
            ))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Create a branch pointing at the head of `from`.
    ///
    /// Three sequential steps: fetch the source branch for its head sha,
    /// create `refs/heads/{name}` at that sha, then fetch and return the
    /// new branch (the ref-creation response has a different shape than a
    /// branch).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential,
    /// [`Error::SourceBranchNotFound`] if `from` does not exist, or the
    /// unchanged failure of whichever later step failed first.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        from: &str,
    ) -> Result<Branch, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "create branches",
            });
        }

        let source = match self.get(owner, repo, from).await {
            Ok(branch) => branch,
            Err(Error::NotFound { .. }) => {
                return Err(Error::SourceBranchNotFound {
                    branch: from.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(owner, repo, name, sha = %source.commit.sha, "creating branch ref");

        let body = json!({
            "ref": format!("refs/heads/{name}"),
            "sha": source.commit.sha,
        });
        let value = self
            .transport
            .send(Request::new(Method::Post, format!("/repos/{owner}/{repo}/git/refs")).body(body))
            .await?;
        let _created: RefCreated = serde_json::from_value(value)?;

        self.get(owner, repo, name).await
    }

    /// Delete a branch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn delete(&self, owner: &str, repo: &str, name: &str) -> Result<(), Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "delete branches",
            });
        }

        self.transport
            .send(Request::new(
                Method::Delete,
                format!("/repos/{owner}/{repo}/git/refs/heads/{name}"),
            ))
            .await?;
        Ok(())
    }
}
