//! Error types for the seeker crate.
//!
//! Pipeline stages never fail. Errors only come from parsing user-facing
//! tokens such as `"name-asc"` into typed query inputs.

use thiserror::Error;

/// Errors that can occur when building query inputs from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// The sort key is not one of the supported keys.
    #[error("unknown sort key '{0}' (expected name, founded_year or employee_count)")]
    UnknownSortKey(String),

    /// The sort direction is neither ascending nor descending.
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownDirection(String),

    /// A sort option token is not of the form `<key>-<dir>`.
    #[error("malformed sort option '{0}' (expected <key>-<dir>, e.g. name-asc)")]
    MalformedSortOption(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
