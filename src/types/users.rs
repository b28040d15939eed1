//! User profile data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_profile_deserializes() {
        let json = r#"{
            "login": "octocat",
            "name": null,
            "email": null,
            "bio": null,
            "company": null,
            "location": null,
            "blog": "",
            "avatar_url": "https://avatars.example.com/octocat",
            "html_url": "https://github.com/octocat",
            "public_repos": 8,
            "public_gists": 0,
            "followers": 100,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(user.login, "octocat");
        assert!(user.name.is_none());
        assert_eq!(user.followers, 100);
    }
}
