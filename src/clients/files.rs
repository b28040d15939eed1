//! File contents resource client.
//!
//! Push and delete are composite transactions. Both start by fetching the
//! file's current sha, which the remote API requires as a precondition for
//! mutation. Push tolerates an absent file (that is the create path);
//! delete treats it as a hard failure. Transient failures during the push
//! existence probe propagate instead of being mistaken for absence, so an
//! update is never silently downgraded to a create.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::{FileContent, PushOutcome};

/// Outcome of the existence probe that precedes a push.
enum FileProbe {
    /// The file exists; its sha must accompany the update.
    Found(String),
    /// The remote reported a clean not-found; the push will create.
    Absent,
}

/// Client for file read and mutation operations.
pub struct FilesClient {
    transport: Arc<dyn Transport>,
}

impl FilesClient {
    /// Create a new files client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Get the contents of a file at a path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if no file exists at the path.
    pub async fn get(&self, owner: &str, repo: &str, path: &str) -> Result<FileContent, Error> {
        let value = self
            .transport
            .send(Request::new(
                Method::Get,
                format!("/repos/{owner}/{repo}/contents/{path}"),
            ))
            .await
            .map_err(|e| match e {
                Error::NotFound { .. } => Error::FileNotFound {
                    path: path.to_string(),
                },
                other => other,
            })?;
        serde_json::from_value(value).map_err(Error::from)
    }

    async fn probe(&self, owner: &str, repo: &str, path: &str) -> Result<FileProbe, Error> {
        match self.get(owner, repo, path).await {
            Ok(file) => Ok(FileProbe::Found(file.sha)),
            Err(Error::FileNotFound { .. }) => Ok(FileProbe::Absent),
            Err(e) => Err(e),
        }
    }

    /// Create or update a file, committing to `branch`.
    ///
    /// The existing file's sha is looked up first; its presence in the PUT
    /// body is what tells the remote API to update rather than create.
    /// Returns the resulting commit sha, or `None` when the response lacks
    /// a commit object — callers must treat `None` as "push result
    /// unknown", not as confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential; probe and PUT
    /// failures propagate unchanged, except that a clean not-found during
    /// the probe selects the create path instead of failing.
    pub async fn push(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content: &str,
        message: &str,
        branch: &str,
    ) -> Result<Option<String>, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "push files",
            });
        }

        let sha = match self.probe(owner, repo, path).await? {
            FileProbe::Found(sha) => Some(sha),
            FileProbe::Absent => None,
        };

        tracing::debug!(owner, repo, path, update = sha.is_some(), "pushing file");

        let mut body = json!({
            "message": message,
            "content": BASE64.encode(content.as_bytes()),
            "branch": branch,
        });
        if let Some(sha) = &sha {
            body["sha"] = json!(sha);
        }

        let value = self
            .transport
            .send(
                Request::new(Method::Put, format!("/repos/{owner}/{repo}/contents/{path}"))
                    .body(body),
            )
            .await?;
        let outcome: PushOutcome = serde_json::from_value(value)?;
        Ok(outcome.commit.map(|c| c.sha))
    }

    /// Delete a file, committing to `branch`.
    ///
    /// Fetches the file's sha first; without a valid sha the remote API
    /// cannot delete, so a missing file is a hard precondition failure and
    /// the DELETE is never issued.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential, or
    /// [`Error::FileNotFound`] if no file exists at the path.
    pub async fn delete(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        message: &str,
        branch: &str,
    ) -> Result<(), Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "delete files",
            });
        }

        let file = self.get(owner, repo, path).await?;

        let body = json!({
            "message": message,
            "sha": file.sha,
            "branch": branch,
        });
        self.transport
            .send(
                Request::new(
                    Method::Delete,
                    format!("/repos/{owner}/{repo}/contents/{path}"),
                )
                .body(body),
            )
            .await?;
        Ok(())
    }
}
