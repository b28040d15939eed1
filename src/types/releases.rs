//! Release data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A release, identified by its tag name within a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    /// Display name; may be absent for tag-only releases
    pub name: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "draft", default)]
    pub is_draft: bool,
    #[serde(rename = "prerelease", default)]
    pub is_prerelease: bool,
    pub created_at: DateTime<Utc>,
    /// Absent while the release is a draft
    pub published_at: Option<DateTime<Utc>>,
    pub html_url: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A downloadable asset attached to a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
    pub size: u64,
    #[serde(default)]
    pub download_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_release_has_no_published_at() {
        let json = r#"{
            "tag_name": "v0.1.0",
            "name": "First cut",
            "body": null,
            "draft": true,
            "prerelease": false,
            "created_at": "2024-03-01T12:00:00Z",
            "published_at": null,
            "html_url": "https://github.com/acme/octogate/releases/tag/v0.1.0",
            "assets": []
        }"#;

        let release: Release = serde_json::from_str(json).expect("should deserialize");
        assert!(release.is_draft);
        assert!(release.published_at.is_none());
        assert!(release.assets.is_empty());
    }
}
