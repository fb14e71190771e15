//! Verification-layer error types
//!
//! Per-file problems (missing, wrong size, wrong hash, unreadable) are not
//! errors at this layer: they are verification outcomes, absorbed into the
//! missing-or-invalid classification. Only failures that make a whole scan
//! meaningless surface as errors.

use launchpad_core::LaunchpadError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for verification operations
pub type VerifyResult<T> = std::result::Result<T, VerifyError>;

/// Verification-layer error types
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The storage root itself is inaccessible; no per-file recovery is
    /// possible, so this propagates to the caller
    #[error("Storage root unavailable: {}", .0.display())]
    StorageUnavailable(PathBuf),

    /// A verification worker task failed to complete
    #[error("Verification task failed: {0}")]
    Task(String),

    /// Domain-model error from `launchpad-core`
    #[error(transparent)]
    Domain(#[from] LaunchpadError),
}
