//! Data models mirroring the GitHub REST API's JSON shapes.
//!
//! All records are read-only projections fetched per call; nothing in this
//! crate owns or mutates them after deserialization.

pub mod actions;
pub mod branches;
pub mod commits;
pub mod files;
pub mod issues;
pub mod pulls;
pub mod releases;
pub mod repos;
pub mod users;

pub use actions::{WorkflowRun, WorkflowRunsPage};
pub use branches::{Branch, CommitRef, RefCreated};
pub use commits::{Commit, CommitAuthor, CommitDetail};
pub use files::{FileCommit, FileContent, PushOutcome};
pub use issues::{Issue, IssueAuthor};
pub use pulls::PullRequest;
pub use releases::{Release, ReleaseAsset};
pub use repos::{Collaborator, Fork, ForkOwner, Permissions, Repository, SearchResults};
pub use users::User;
