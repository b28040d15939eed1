//! Commit data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as returned by the commits listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// The commit's identity
    pub sha: String,
    pub commit: CommitDetail,
    pub html_url: String,
}

/// Message and author of a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_deserializes_nested_author() {
        let json = r#"{
            "sha": "abc123",
            "commit": {
                "message": "Fix clamp",
                "author": {"name": "Dev", "email": "dev@example.com", "date": "2024-03-01T12:00:00Z"}
            },
            "html_url": "https://github.com/acme/octogate/commit/abc123"
        }"#;

        let commit: Commit = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.commit.author.email, "dev@example.com");
    }
}
