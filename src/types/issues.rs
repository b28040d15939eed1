//! Issue data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue, identified by its number within a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// "open" or "closed"
    pub state: String,
    pub html_url: String,
    pub body: Option<String>,
    pub user: IssueAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Author of an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueAuthor {
    pub login: String,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_issue_has_no_closed_at() {
        let json = r#"{
            "number": 7,
            "title": "Clamp limits",
            "state": "open",
            "html_url": "https://github.com/acme/octogate/issues/7",
            "body": null,
            "user": {"login": "dev", "avatar_url": "https://avatars.example.com/dev"},
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-02T12:00:00Z",
            "closed_at": null
        }"#;

        let issue: Issue = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(issue.number, 7);
        assert!(issue.closed_at.is_none());
        assert!(issue.body.is_none());
    }
}
