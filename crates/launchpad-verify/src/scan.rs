//! Whole-manifest scans: which declared artifacts are missing or invalid
//!
//! A scan classifies every record in a manifest against the object store.
//! Per-file problems never abort the scan; they are recorded and the scan
//! continues. Only an inaccessible store root is a hard error.

use launchpad_core::{ArtifactRecord, ReleaseManifest};
use tracing::debug;

use crate::error::VerifyResult;
use crate::integrity::{check_artifact, VerificationOutcome};
use crate::store::ObjectStore;

/// One record that failed verification, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    /// The declared record that is missing or invalid
    pub record: ArtifactRecord,
    /// Why verification failed
    pub outcome: VerificationOutcome,
}

/// Aggregate result of scanning one manifest
///
/// Failures appear in manifest insertion order, so scan output is
/// deterministic for deterministic inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of records the manifest declares
    pub total: usize,
    /// Number of records that verified as valid
    pub valid: usize,
    /// Records that are missing or invalid, with their outcomes
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    /// Check whether every declared artifact verified as valid
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Extract just the missing-or-invalid records
    pub fn into_missing_or_invalid(self) -> Vec<ArtifactRecord> {
        self.failures.into_iter().map(|f| f.record).collect()
    }
}

/// Scan every record in the manifest against the store
///
/// # Errors
/// Returns `StorageUnavailable` if the store root itself is inaccessible.
/// Per-record I/O errors do not abort the scan; they classify the record as
/// invalid and the scan continues.
pub fn scan(manifest: &ReleaseManifest, store: &ObjectStore) -> VerifyResult<ScanReport> {
    store.ensure_available()?;

    let mut failures = Vec::new();
    let mut valid = 0usize;

    for record in manifest.artifacts() {
        let outcome = check_artifact(store, record);
        if outcome.is_valid() {
            valid += 1;
        } else {
            failures.push(ScanFailure {
                record: record.clone(),
                outcome,
            });
        }
    }

    debug!(
        manifest = %manifest.id(),
        total = manifest.len(),
        valid,
        failed = failures.len(),
        "manifest scan complete"
    );

    Ok(ScanReport {
        total: manifest.len(),
        valid,
        failures,
    })
}

/// Compute the set of declared artifacts that are missing or invalid
///
/// This is the interface the download layer consumes to decide what to
/// (re)fetch. Membership is exactly the records that fail verification;
/// ordering follows manifest insertion order.
pub fn missing_or_invalid(
    manifest: &ReleaseManifest,
    store: &ObjectStore,
) -> VerifyResult<Vec<ArtifactRecord>> {
    Ok(scan(manifest, store)?.into_missing_or_invalid())
}
