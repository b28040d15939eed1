//! Branch data models.

use serde::{Deserialize, Serialize};

/// A branch and the commit its head points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name, unique within a repository
    pub name: String,
    /// Head commit of the branch
    pub commit: CommitRef,
    /// Whether branch protection is enabled
    #[serde(rename = "protected", default)]
    pub is_protected: bool,
}

/// A `(sha, url)` reference to a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    pub url: String,
}

/// Response of the git ref creation endpoint.
///
/// This shape differs from [`Branch`], which is why branch creation
/// re-fetches the branch after creating the ref.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefCreated {
    #[serde(rename = "ref")]
    pub reference: String,
    pub url: String,
    pub object: CommitRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_protection_defaults_to_false() {
        let json = r#"{
            "name": "main",
            "commit": {"sha": "abc123", "url": "https://api.github.com/repos/a/b/commits/abc123"}
        }"#;

        let branch: Branch = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(branch.commit.sha, "abc123");
        assert!(!branch.is_protected);
    }

    #[test]
    fn ref_created_maps_the_ref_keyword() {
        let json = r#"{
            "ref": "refs/heads/feature",
            "url": "https://api.github.com/repos/a/b/git/refs/heads/feature",
            "object": {"sha": "abc123", "url": "https://api.github.com/repos/a/b/git/commits/abc123"}
        }"#;

        let created: RefCreated = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(created.reference, "refs/heads/feature");
        assert_eq!(created.object.sha, "abc123");
    }
}
