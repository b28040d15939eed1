//! Typed gateway over the GitHub REST API for automated agents.
//!
//! The crate turns abstract intents ("list branches of X/Y", "push a file",
//! "create a branch") into correctly sequenced, authenticated HTTP calls.
//! Simple operations map to a single request; branch creation, file push
//! and file delete are short sagas of dependent calls with typed
//! partial-failure semantics. A small flat-file key-value store
//! ([`MemoryStore`]) rides along for agent memory.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use octogate::GitHubClient;
//!
//! let client = GitHubClient::from_env()?;
//!
//! let repos = client.repos().search("http client", Some(5)).await?;
//! let sha = client
//!     .files()
//!     .push("acme", "octogate", "notes.md", "hello", "add notes", "main")
//!     .await?;
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod memory;
pub mod testing;
pub mod transport;
pub mod types;

pub use client::GitHubClient;
pub use clients::{
    ActionsClient, BranchesClient, CommitsClient, FilesClient, IssuesClient, PullsClient,
    ReleasesClient, ReposClient, SocialClient, UsersClient, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use config::Config;
pub use error::Error;
pub use memory::MemoryStore;
pub use transport::{HttpTransport, Method, Request, Transport, DEFAULT_BASE_URL};
pub use types::{
    Branch, Collaborator, Commit, CommitRef, FileContent, Fork, Issue, PullRequest, Release,
    ReleaseAsset, Repository, SearchResults, User, WorkflowRun,
};
