//! Resource clients, one per remote API domain.
//!
//! Every client holds a shared [`Transport`](crate::transport::Transport)
//! and exposes one method per remote operation. Write operations check the
//! credential gate before issuing any network call; composite operations
//! (branch creation, file push, file delete) drive a fixed sequence of
//! dependent calls with no rollback.

pub mod actions;
pub mod branches;
pub mod commits;
pub mod files;
pub mod issues;
pub mod pulls;
pub mod releases;
pub mod repos;
pub mod social;
pub mod users;

pub use actions::ActionsClient;
pub use branches::BranchesClient;
pub use commits::CommitsClient;
pub use files::FilesClient;
pub use issues::IssuesClient;
pub use pulls::PullsClient;
pub use releases::ReleasesClient;
pub use repos::ReposClient;
pub use social::SocialClient;
pub use users::UsersClient;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// The remote API's hard page cap.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Effective page size when the caller passes no usable limit.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Clamp a caller-requested page size to `[1, 100]`.
///
/// Absent and zero both fall back to the default of 10.
pub(crate) fn page_size(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(n) => n.min(MAX_PAGE_SIZE),
    }
}

/// Decode a JSON array into a typed list, treating `null` as empty.
///
/// A `null` or empty result list is a valid outcome of every listing
/// endpoint, not an error.
pub(crate) fn list_from<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, Error> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Branch;

    #[test]
    fn page_size_defaults_when_absent_or_zero() {
        assert_eq!(page_size(None), 10);
        assert_eq!(page_size(Some(0)), 10);
    }

    #[test]
    fn page_size_passes_in_range_values_through() {
        assert_eq!(page_size(Some(1)), 1);
        assert_eq!(page_size(Some(10)), 10);
        assert_eq!(page_size(Some(42)), 42);
        assert_eq!(page_size(Some(100)), 100);
    }

    #[test]
    fn page_size_clamps_to_the_remote_cap() {
        assert_eq!(page_size(Some(101)), 100);
        assert_eq!(page_size(Some(u32::MAX)), 100);
    }

    #[test]
    fn null_list_decodes_to_empty() {
        let branches: Vec<Branch> = list_from(Value::Null).expect("null should decode");
        assert!(branches.is_empty());
    }
}
