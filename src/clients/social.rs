//! Starring resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::{Method, Request, Transport};

/// Client for the authenticated user's star relations.
pub struct SocialClient {
    transport: Arc<dyn Transport>,
}

impl SocialClient {
    /// Create a new social client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Star a repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn star(&self, owner: &str, repo: &str) -> Result<(), Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "star repositories",
            });
        }

        self.transport
            .send(Request::new(
                Method::Put,
                format!("/user/starred/{owner}/{repo}"),
            ))
            .await?;
        Ok(())
    }

    /// Remove a star from a repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn unstar(&self, owner: &str, repo: &str) -> Result<(), Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "unstar repositories",
            });
        }

        self.transport
            .send(Request::new(
                Method::Delete,
                format!("/user/starred/{owner}/{repo}"),
            ))
            .await?;
        Ok(())
    }

    /// Whether the authenticated user has starred a repository.
    ///
    /// The boolean derives entirely from the call's outcome: any 2xx means
    /// starred, any failure (typically a 404) means not starred. Without a
    /// credential the predicate is `false` rather than an error, so "not
    /// authenticated" and "not starred" are deliberately conflated here.
    pub async fn is_starred(&self, owner: &str, repo: &str) -> bool {
        if !self.transport.has_credential() {
            return false;
        }

        self.transport
            .send(Request::new(
                Method::Get,
                format!("/user/starred/{owner}/{repo}"),
            ))
            .await
            .is_ok()
    }
}
