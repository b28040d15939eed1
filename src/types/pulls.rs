//! Pull request data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::issues::IssueAuthor;

/// A pull request, identified by its number within a repository.
///
/// A merged pull request still reports `state == "closed"` on the wire;
/// `merged_at` is what distinguishes merged from merely closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    /// "open" or "closed"
    pub state: String,
    pub html_url: String,
    pub body: Option<String>,
    pub user: IssueAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(rename = "draft", default)]
    pub is_draft: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_pr_carries_merged_at() {
        let json = r#"{
            "number": 12,
            "title": "Add gateway",
            "state": "closed",
            "html_url": "https://github.com/acme/octogate/pull/12",
            "body": "Implements the gateway.",
            "user": {"login": "dev", "avatar_url": "https://avatars.example.com/dev"},
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-05T12:00:00Z",
            "merged_at": "2024-03-05T12:00:00Z",
            "draft": false
        }"#;

        let pr: PullRequest = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(pr.state, "closed");
        assert!(pr.merged_at.is_some());
        assert!(!pr.is_draft);
    }
}
