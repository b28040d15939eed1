//! File content data models.

use serde::{Deserialize, Serialize};

/// Contents of a file (or metadata of a directory entry) at a path.
///
/// The `sha` is the precondition required by the remote API to update or
/// delete the file; a missing file has no sha.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    /// "file", "dir", "symlink" or "submodule"
    #[serde(rename = "type")]
    pub kind: String,
    pub download_url: Option<String>,
    pub html_url: Option<String>,
    /// Base64-encoded body; absent for directories and oversized files
    pub content: Option<String>,
    pub encoding: Option<String>,
}

/// Response envelope of a contents PUT (create-or-update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushOutcome {
    pub content: Option<FileContent>,
    /// The commit that recorded the change; absent means the push result
    /// is unknown, not that it failed.
    pub commit: Option<FileCommit>,
}

/// The commit object inside a [`PushOutcome`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCommit {
    pub sha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_outcome_tolerates_missing_commit() {
        let outcome: PushOutcome =
            serde_json::from_str(r#"{"content": null}"#).expect("should deserialize");
        assert!(outcome.commit.is_none());
    }

    #[test]
    fn file_content_keeps_encoded_body() {
        let json = r#"{
            "name": "README.md",
            "path": "README.md",
            "sha": "def456",
            "size": 12,
            "type": "file",
            "download_url": "https://raw.example.com/README.md",
            "html_url": "https://github.com/acme/octogate/blob/main/README.md",
            "content": "aGVsbG8gd29ybGQ=",
            "encoding": "base64"
        }"#;

        let file: FileContent = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(file.sha, "def456");
        assert_eq!(file.encoding.as_deref(), Some("base64"));
    }
}
