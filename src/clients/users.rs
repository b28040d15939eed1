//! Users resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::{Method, Request, Transport};
use crate::types::User;

/// Client for user profile lookups.
pub struct UsersClient {
    transport: Arc<dyn Transport>,
}

impl UsersClient {
    /// Create a new users client.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Get a user's public profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the user does not exist.
    pub async fn get(&self, username: &str) -> Result<User, Error> {
        let value = self
            .transport
            .send(Request::new(Method::Get, format!("/users/{username}")))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Get the authenticated user's own profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] without a configured credential.
    pub async fn authenticated(&self) -> Result<User, Error> {
        if !self.transport.has_credential() {
            return Err(Error::AuthRequired {
                operation: "read the authenticated profile",
            });
        }

        let value = self
            .transport
            .send(Request::new(Method::Get, "/user"))
            .await?;
        serde_json::from_value(value).map_err(Error::from)
    }
}
