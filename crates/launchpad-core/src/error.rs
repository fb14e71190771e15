//! Error types for the launchpad domain model

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, LaunchpadError>;

/// Main error type for domain-model operations
///
/// These errors always indicate a caller bug: malformed manifest data handed
/// to a constructor. They are not recoverable at this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchpadError {
    /// Malformed record field at construction time
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed content hash string
    #[error("Invalid hash format: {0}")]
    InvalidHashFormat(String),
}
