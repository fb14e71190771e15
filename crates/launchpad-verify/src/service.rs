//! Async verification service with internal per-record parallelism
//!
//! Callers that verify assets and libraries from worker tasks use this
//! service instead of the synchronous scan. Each record's I/O is independent,
//! so checks run on blocking worker threads with bounded concurrency. Every
//! verification owns its digest state and read buffer; nothing is shared
//! between in-flight checks, and results merge back in manifest insertion
//! order regardless of completion order.

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use launchpad_core::{ArtifactRecord, ReleaseManifest};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, instrument};

use crate::error::{VerifyError, VerifyResult};
use crate::integrity::{check_artifact, VerificationOutcome};
use crate::scan::{ScanFailure, ScanReport};
use crate::store::ObjectStore;

/// Default number of concurrently in-flight record checks
const DEFAULT_CONCURRENCY: usize = 8;

/// Trait for manifest verification operations
#[async_trait]
pub trait ManifestVerifier: Send + Sync {
    /// Scan every record in the manifest, reporting per-record outcomes
    async fn scan(&self, manifest: &ReleaseManifest) -> VerifyResult<ScanReport>;

    /// Compute the set of declared artifacts that are missing or invalid
    async fn missing_or_invalid(
        &self,
        manifest: &ReleaseManifest,
    ) -> VerifyResult<Vec<ArtifactRecord>>;

    /// Verify a single record, for targeted re-checks after a download
    async fn verify_record(&self, record: &ArtifactRecord) -> VerifyResult<VerificationOutcome>;
}

/// Manifest verifier that checks records in parallel
///
/// Safe to share behind an `Arc` and to invoke concurrently: the store handle
/// and all records are immutable, so concurrent scans of distinct manifests
/// require no locking.
pub struct ParallelManifestVerifier {
    store: Arc<ObjectStore>,
    concurrency: usize,
}

impl ParallelManifestVerifier {
    /// Create a verifier with the default concurrency limit
    pub fn new(store: Arc<ObjectStore>) -> Self {
        Self::with_concurrency(store, DEFAULT_CONCURRENCY)
    }

    /// Create a verifier with an explicit concurrency limit (minimum 1)
    pub fn with_concurrency(store: Arc<ObjectStore>, concurrency: usize) -> Self {
        Self {
            store,
            concurrency: concurrency.max(1),
        }
    }

    /// Get the store this verifier checks against
    pub fn store(&self) -> &Arc<ObjectStore> {
        &self.store
    }
}

#[async_trait]
impl ManifestVerifier for ParallelManifestVerifier {
    #[instrument(skip(self, manifest), fields(manifest = %manifest.id()))]
    async fn scan(&self, manifest: &ReleaseManifest) -> VerifyResult<ScanReport> {
        self.store.ensure_available()?;

        let records: Vec<ArtifactRecord> = manifest.artifacts().cloned().collect();
        let total = records.len();

        // Ordered buffering keeps results in manifest insertion order even
        // though checks complete out of order.
        let outcomes: Vec<(ArtifactRecord, VerificationOutcome)> = stream::iter(records)
            .map(|record| {
                let store = Arc::clone(&self.store);
                async move {
                    task::spawn_blocking(move || {
                        let outcome = check_artifact(&store, &record);
                        (record, outcome)
                    })
                    .await
                    .map_err(|err| VerifyError::Task(err.to_string()))
                }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let mut failures = Vec::new();
        let mut valid = 0usize;
        for (record, outcome) in outcomes {
            if outcome.is_valid() {
                valid += 1;
            } else {
                failures.push(ScanFailure { record, outcome });
            }
        }

        debug!(total, valid, failed = failures.len(), "parallel scan complete");

        Ok(ScanReport {
            total,
            valid,
            failures,
        })
    }

    async fn missing_or_invalid(
        &self,
        manifest: &ReleaseManifest,
    ) -> VerifyResult<Vec<ArtifactRecord>> {
        Ok(self.scan(manifest).await?.into_missing_or_invalid())
    }

    #[instrument(skip(self, record), fields(artifact = %record.identifier))]
    async fn verify_record(&self, record: &ArtifactRecord) -> VerifyResult<VerificationOutcome> {
        let store = Arc::clone(&self.store);
        let record = record.clone();
        task::spawn_blocking(move || check_artifact(&store, &record))
            .await
            .map_err(|err| VerifyError::Task(err.to_string()))
    }
}
