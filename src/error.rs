//! Error types for the gateway.
//!
//! Every operation surfaces one of these variants; callers can match on them
//! without inspecting message strings. Write operations fail with
//! [`Error::AuthRequired`] before any network call when no credential is
//! configured.

use thiserror::Error;

/// Main error type for the gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// A write operation was invoked without a configured credential.
    ///
    /// Raised before any network call is issued.
    #[error("GitHub token required to {operation}")]
    AuthRequired {
        /// What the caller was trying to do, e.g. "create branches".
        operation: &'static str,
    },

    /// The source branch of a branch-creation saga does not exist upstream.
    #[error("source branch not found: {branch}")]
    SourceBranchNotFound { branch: String },

    /// A file operation's precondition fetch found no file at the path.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The remote API returned 404 for the requested entity.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The remote API returned a non-404 client or server error
    /// (validation, conflict, rate limit, ...).
    #[error("GitHub rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Network-level failure: DNS, timeout, connection reset, or an
    /// undecodable response body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Invalid or missing configuration value.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Memory store I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the requested entity is missing upstream.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::SourceBranchNotFound { .. } | Self::FileNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_required_names_the_operation() {
        let error = Error::AuthRequired {
            operation: "create branches",
        };
        assert_eq!(error.to_string(), "GitHub token required to create branches");
    }

    #[test]
    fn not_found_classification() {
        assert!(Error::NotFound {
            resource: "branch".to_string()
        }
        .is_not_found());
        assert!(Error::FileNotFound {
            path: "docs/a.md".to_string()
        }
        .is_not_found());
        assert!(Error::SourceBranchNotFound {
            branch: "main".to_string()
        }
        .is_not_found());
        assert!(!Error::Rejected {
            status: 422,
            message: "Validation Failed".to_string()
        }
        .is_not_found());
        assert!(!Error::Transport("timeout".to_string()).is_not_found());
    }
}
