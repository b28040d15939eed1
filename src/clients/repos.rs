//! Repositories resource client.

use std::sync::Arc;

use serde_json::json;

use crate::clients::{list_from, page_size, MAX_PAGE_SIZE};
use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::{Collaborator, Fork, Repository, SearchResults};

/// Client for repository-level operations.
pub struct ReposClient {
    transport: Arc<dyn Transport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List a user's public repositories, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the request fails.
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<Repository>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/users/{username}/repos"))
                    .query("sort", "updated")
                    .query("per_page", MAX_PAGE_SIZE),
            )
            .await?;
        list_from(value)
    }

    /// List all repositories of the authenticated user, private included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a configured credential.
    pub async fn list_authenticated(&self) -> Result<Vec<Repository>, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "list private repositories",
            });
        }

        let value = self
            .transport
            .send(
                Request::new(Method::Get, "/user/repos")
                    .query("per_page", MAX_PAGE_SIZE)
                    .query("type", "all"),
            )
            .await?;
        list_from(value)
    }

    /// Create a repository for the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential, or
    /// [`Error::Rejected`] if the name is taken.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<Repository, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "create repositories",
            });
        }

        let body = json!({
            "name": name,
            "description": description,
            "private": private,
        });
        let value = self
            .transport
            .send(Request::new(Method::Post, "/user/repos").body(body))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Update a repository's name, description and visibility.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<Repository, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "update repositories",
            });
        }

        let body = json!({
            "name": name,
            "description": description,
            "private": private,
        });
        let value = self
            .transport
            .send(Request::new(Method::Patch, format!("/repos/{owner}/{repo}")).body(body))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Delete a repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn delete(&self, owner: &str, repo: &str) -> Result<(), Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "delete repositories",
            });
        }

        self.transport
            .send(Request::new(Method::Delete, format!("/repos/{owner}/{repo}")))
            .await?;
        Ok(())
    }

    /// Search public repositories, best-starred first.
    ///
    /// A missing envelope counts as zero results.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<Repository>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, "/search/repositories")
                    .query("q", query)
                    .query("per_page", page_size(limit))
                    .query("sort", "stars")
                    .query("order", "desc"),
            )
            .await?;

        if value.is_null() {
            return Ok(Vec::new());
        }
        let results: SearchResults = serde_json::from_value(value)?;
        Ok(results.items)
    }

    /// List forks of a repository, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Fork>, Error> {
        let value = self
            .transport
            .send(
                Request::new(Method::Get, format!("/repos/{owner}/{repo}/forks"))
                    .query("per_page", page_size(limit))
                    .query("sort", "newest"),
            )
            .await?;
        list_from(value)
    }

    /// Fork a repository into the authenticated user's account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a credential.
    pub async fn create_fork(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "fork repositories",
            });
        }

        let value = self
            .transport
            .send(Request::new(
                Method::Post,
                format!("/repos/{owner}/{repo}/forks"),
            ))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// List collaborators of a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_collaborators(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Collaborator>, Error> {
        let value = self
            .transport
            .send(Request::new(
                Method::Get,
                format!("/repos/{owner}/{repo}/collaborators"),
            ))
            .await?;
        list_from(value)
    }
}
