//! Filesystem verification layer for the launchpad metadata layer
//!
//! This crate determines which artifacts declared by a release manifest are
//! present and intact on local content-addressed storage, and which must be
//! (re)fetched by the download layer.
//!
//! # Architecture
//!
//! - **ObjectStore**: handle to the content-addressed objects subtree
//! - **integrity**: streaming per-object verification with detailed outcomes
//! - **scan**: synchronous whole-manifest scans and the missing-or-invalid set
//! - **ManifestVerifier**: async service that parallelizes per-record checks
//!
//! # Example
//!
//! ```rust,no_run
//! use launchpad_core::ReleaseManifest;
//! use launchpad_verify::{missing_or_invalid, ObjectStore};
//!
//! # fn example(manifest: &ReleaseManifest) -> launchpad_verify::VerifyResult<()> {
//! let store = ObjectStore::new("/data/assets/objects");
//! let to_fetch = missing_or_invalid(manifest, &store)?;
//! for record in &to_fetch {
//!     println!("needs download: {record}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod integrity;
pub mod scan;
pub mod service;
pub mod store;

// Re-export main types for convenience
pub use error::{VerifyError, VerifyResult};
pub use integrity::{
    check_artifact, check_object, verify_artifact, verify_object, VerificationOutcome,
};
pub use scan::{missing_or_invalid, scan, ScanFailure, ScanReport};
pub use service::{ManifestVerifier, ParallelManifestVerifier};
pub use store::ObjectStore;
