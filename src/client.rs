//! Main gateway client.
//!
//! [`GitHubClient`] aggregates one resource client per remote API domain
//! over a shared transport. The base URL and optional bearer credential are
//! fixed at construction; there is no shared mutable state between
//! operations.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{
    ActionsClient, BranchesClient, CommitsClient, FilesClient, IssuesClient, PullsClient,
    ReleasesClient, ReposClient, SocialClient, UsersClient,
};
use crate::config::Config;
use crate::error::Error;
use crate::transport::{HttpTransport, Transport};

/// Gateway over the GitHub REST API.
///
/// # Example
///
/// ```rust,ignore
/// use octogate::GitHubClient;
///
/// let client = GitHubClient::from_env()?;
/// let branches = client.branches().list("acme", "octogate").await?;
/// let branch = client
///     .branches()
///     .create("acme", "octogate", "feature", "main")
///     .await?;
/// ```
pub struct GitHubClient {
    transport: Arc<dyn Transport>,
    repos: ReposClient,
    commits: CommitsClient,
    branches: BranchesClient,
    issues: IssuesClient,
    pulls: PullsClient,
    releases: ReleasesClient,
    users: UsersClient,
    actions: ActionsClient,
    files: FilesClient,
    social: SocialClient,
}

impl GitHubClient {
    /// Create a client against a base URL with an optional bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP transport cannot be built.
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, Error> {
        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(base_url, token, timeout)?);
        Ok(Self::with_transport(transport))
    }

    /// Create a client from environment variables (see [`Config::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for unparseable variables or
    /// [`Error::Transport`] if the HTTP transport cannot be built.
    pub fn from_env() -> Result<Self, Error> {
        let config = Config::from_env()?;
        Self::new(
            &config.base_url,
            config.token,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Create a client over an arbitrary transport.
    ///
    /// This is the seam tests use to drive the resource clients through
    /// [`crate::testing::MockTransport`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            repos: ReposClient::new(Arc::clone(&transport)),
            commits: CommitsClient::new(Arc::clone(&transport)),
            branches: BranchesClient::new(Arc::clone(&transport)),
            issues: IssuesClient::new(Arc::clone(&transport)),
            pulls: PullsClient::new(Arc::clone(&transport)),
            releases: ReleasesClient::new(Arc::clone(&transport)),
            users: UsersClient::new(Arc::clone(&transport)),
            actions: ActionsClient::new(Arc::clone(&transport)),
            files: FilesClient::new(Arc::clone(&transport)),
            social: SocialClient::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Whether a bearer credential is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.transport.has_credential()
    }

    /// Get the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Get the commits client.
    #[must_use]
    pub fn commits(&self) -> &CommitsClient {
        &self.commits
    }

    /// Get the branches client.
    #[must_use]
    pub fn branches(&self) -> &BranchesClient {
        &self.branches
    }

    /// Get the issues client.
    #[must_use]
    pub fn issues(&self) -> &IssuesClient {
        &self.issues
    }

    /// Get the pulls client.
    #[must_use]
    pub fn pulls(&self) -> &PullsClient {
        &self.pulls
    }

    /// Get the releases client.
    #[must_use]
    pub fn releases(&self) -> &ReleasesClient {
        &self.releases
    }

    /// Get the users client.
    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    /// Get the actions client.
    #[must_use]
    pub fn actions(&self) -> &ActionsClient {
        &self.actions
    }

    /// Get the files client.
    #[must_use]
    pub fn files(&self) -> &FilesClient {
        &self.files
    }

    /// Get the social client.
    #[must_use]
    pub fn social(&self) -> &SocialClient {
        &self.social
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::DEFAULT_BASE_URL;

    #[test]
    fn client_creation_without_token() {
        let client = GitHubClient::new(DEFAULT_BASE_URL, None, Duration::from_secs(30))
            .expect("client creation should succeed");
        assert!(!client.has_credential());
    }

    #[test]
    fn client_creation_with_token() {
        let client = GitHubClient::new(
            DEFAULT_BASE_URL,
            Some("ghp_test".to_string()),
            Duration::from_secs(30),
        )
        .expect("client creation should succeed");
        assert!(client.has_credential());
    }
}
