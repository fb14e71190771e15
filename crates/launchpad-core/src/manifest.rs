//! Release manifests: the declared artifact set of one logical release
//!
//! A manifest is an immutable, insertion-ordered set of artifact records
//! associated with one release. It does not own the storage root and performs
//! no I/O itself; the verification layer consumes it to compute the
//! missing-or-invalid set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::artifact::{ArtifactKind, ArtifactRecord};
use crate::error::{LaunchpadError, Result};

/// The declared set of artifacts required by one release
///
/// Uniqueness is by record equality; duplicates are dropped at construction,
/// keeping the first occurrence. Iteration order is insertion order, which
/// makes scan output deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseManifest {
    /// Release identifier (version number or name)
    id: String,

    /// Release type, e.g. "release" or "snapshot"; `None` if unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    release_type: Option<String>,

    /// Name of the asset index this release uses, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    assets_index: Option<String>,

    /// Declared artifacts, insertion-ordered and deduplicated
    artifacts: Vec<ArtifactRecord>,
}

impl ReleaseManifest {
    /// Create a manifest with validation
    ///
    /// Duplicate records are silently dropped, keeping first occurrences.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the release identifier is empty.
    pub fn new(id: impl Into<String>, artifacts: Vec<ArtifactRecord>) -> Result<Self> {
        ReleaseManifestBuilder::new(id).artifacts(artifacts).build()
    }

    /// Create a builder for assembling a manifest
    pub fn builder(id: impl Into<String>) -> ReleaseManifestBuilder {
        ReleaseManifestBuilder::new(id)
    }

    /// Get the release identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the release type, if known
    pub fn release_type(&self) -> Option<&str> {
        self.release_type.as_deref()
    }

    /// Get the asset index name, if any
    pub fn assets_index(&self) -> Option<&str> {
        self.assets_index.as_deref()
    }

    /// Iterate over all declared artifacts in insertion order
    pub fn artifacts(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.artifacts.iter()
    }

    /// Iterate over declared assets only
    pub fn assets(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.of_kind(ArtifactKind::Asset)
    }

    /// Iterate over declared libraries only
    pub fn libraries(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.of_kind(ArtifactKind::Library)
    }

    /// Iterate over declared artifacts of one kind
    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &ArtifactRecord> {
        self.artifacts.iter().filter(move |r| r.kind == kind)
    }

    /// Number of declared artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check whether the manifest declares no artifacts
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Check whether a record is declared by this manifest
    pub fn contains(&self, record: &ArtifactRecord) -> bool {
        self.artifacts.contains(record)
    }
}

impl fmt::Display for ReleaseManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} artifacts)", self.id, self.artifacts.len())
    }
}

/// Builder for `ReleaseManifest`
pub struct ReleaseManifestBuilder {
    id: String,
    release_type: Option<String>,
    assets_index: Option<String>,
    artifacts: Vec<ArtifactRecord>,
}

impl ReleaseManifestBuilder {
    /// Create a new builder
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            release_type: None,
            assets_index: None,
            artifacts: Vec::new(),
        }
    }

    /// Set the release type
    pub fn release_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type = Some(release_type.into());
        self
    }

    /// Set the asset index name
    pub fn assets_index(mut self, assets_index: impl Into<String>) -> Self {
        self.assets_index = Some(assets_index.into());
        self
    }

    /// Add an artifact record
    pub fn artifact(mut self, record: ArtifactRecord) -> Self {
        self.artifacts.push(record);
        self
    }

    /// Add multiple artifact records
    pub fn artifacts(mut self, records: Vec<ArtifactRecord>) -> Self {
        self.artifacts.extend(records);
        self
    }

    /// Build the manifest with validation
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the release identifier is empty.
    pub fn build(self) -> Result<ReleaseManifest> {
        if self.id.is_empty() {
            return Err(LaunchpadError::InvalidArgument(
                "release identifier cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut artifacts = Vec::with_capacity(self.artifacts.len());
        for record in self.artifacts {
            if seen.insert(record.clone()) {
                artifacts.push(record);
            }
        }

        Ok(ReleaseManifest {
            id: self.id,
            release_type: self.release_type,
            assets_index: self.assets_index,
            artifacts,
        })
    }
}
