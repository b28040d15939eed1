//! Repository-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository metadata.
///
/// Identity is the `(owner, name)` pair supplied by the caller; the record
/// itself only carries what the remote API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Repository description
    pub description: Option<String>,
    /// Web URL of the repository
    pub html_url: String,
    /// Primary language, absent for empty repositories
    pub language: Option<String>,
    /// Number of stars
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u64,
    /// Number of forks
    #[serde(rename = "forks_count", default)]
    pub fork_count: u64,
    /// When the repository was created
    pub created_at: DateTime<Utc>,
    /// When the repository was last updated
    pub updated_at: DateTime<Utc>,
    /// Whether the repository is private
    #[serde(rename = "private")]
    pub is_private: bool,
}

/// Envelope returned by the repository search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matching repositories; a missing field means zero results.
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// A fork of a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fork {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub owner: ForkOwner,
    pub created_at: DateTime<Utc>,
}

/// Owner of a fork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForkOwner {
    pub login: String,
    pub html_url: String,
}

/// A repository collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    /// "User" or "Organization"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub site_admin: bool,
    pub permissions: Option<Permissions>,
}

/// Permission flags of a collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub pull: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_deserializes_from_wire_names() {
        let json = r#"{
            "name": "octogate",
            "full_name": "acme/octogate",
            "description": "A gateway",
            "html_url": "https://github.com/acme/octogate",
            "language": "Rust",
            "stargazers_count": 42,
            "forks_count": 7,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-06-01T08:00:00Z",
            "private": false
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(repo.full_name, "acme/octogate");
        assert_eq!(repo.star_count, 42);
        assert_eq!(repo.fork_count, 7);
        assert!(!repo.is_private);
    }

    #[test]
    fn search_results_default_to_empty_items() {
        let results: SearchResults =
            serde_json::from_str(r#"{"total_count": 0, "incomplete_results": false}"#)
                .expect("should deserialize");
        assert!(results.items.is_empty());
    }
}
