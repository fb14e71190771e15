//! Core domain models for the launchpad metadata layer
//!
//! This crate contains the immutable value types that describe a release and
//! its required artifacts: content hashes with content-address derivation,
//! artifact records, and release manifests. It performs no I/O; filesystem
//! verification lives in `launchpad-verify`.

pub mod artifact;
pub mod error;
pub mod hash;
pub mod manifest;

// Re-exports for convenience
pub use artifact::{ArtifactKind, ArtifactRecord};
pub use error::{LaunchpadError, Result};
pub use hash::{ContentHash, EMPTY_SHA1, SHA1_HEX_LENGTH, SHA1_LENGTH};
pub use manifest::{ReleaseManifest, ReleaseManifestBuilder};
