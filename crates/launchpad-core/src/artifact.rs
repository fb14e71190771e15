//! Artifact records declared by a release manifest
//!
//! An artifact is a single required file — a game asset or a library — that
//! must be present and intact on local storage before a release can launch.
//! Records are immutable value objects constructed once from parsed manifest
//! data and discarded with the manifest.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LaunchpadError, Result};
use crate::hash::ContentHash;

/// Kinds of artifacts a release manifest can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Game asset; the identifier is a virtual path (e.g. `sounds/click.ogg`)
    Asset,
    /// Code library; the identifier is a library coordinate
    /// (e.g. `org.lwjgl:lwjgl:3.3.3`)
    Library,
}

impl ArtifactKind {
    /// Get the string representation of the artifact kind
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactKind::Asset => "asset",
            ArtifactKind::Library => "library",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single required file declared by a release manifest
///
/// Immutable value object: equality and hashing are structural over all
/// fields, and no field can be mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Artifact kind (asset or library)
    pub kind: ArtifactKind,

    /// Virtual path (assets) or library coordinate (libraries)
    pub identifier: String,

    /// Content hash; also the content-addressed storage key
    pub hash: ContentHash,

    /// Expected byte length of the file
    pub size: u64,
}

impl ArtifactRecord {
    /// Create an artifact record with validation
    ///
    /// The size is accepted as a signed integer so that negative values from
    /// malformed manifest data are rejected here rather than silently
    /// wrapping; valid sizes are stored as `u64` and files larger than 2 GiB
    /// are fully supported.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the identifier is empty or the size is
    /// negative.
    pub fn new(
        kind: ArtifactKind,
        identifier: impl Into<String>,
        hash: ContentHash,
        size: i64,
    ) -> Result<Self> {
        let identifier = identifier.into();

        if identifier.is_empty() {
            return Err(LaunchpadError::InvalidArgument(
                "artifact identifier cannot be empty".to_string(),
            ));
        }

        if size < 0 {
            return Err(LaunchpadError::InvalidArgument(format!(
                "artifact size cannot be negative, got {}",
                size
            )));
        }

        Ok(Self {
            kind,
            identifier,
            hash,
            size: size as u64,
        })
    }

    /// Create an asset record
    pub fn asset(virtual_path: impl Into<String>, hash: ContentHash, size: i64) -> Result<Self> {
        Self::new(ArtifactKind::Asset, virtual_path, hash, size)
    }

    /// Create a library record
    pub fn library(coordinate: impl Into<String>, hash: ContentHash, size: i64) -> Result<Self> {
        Self::new(ArtifactKind::Library, coordinate, hash, size)
    }

    /// Derive the relative content address of this artifact's file
    pub fn content_path(&self) -> String {
        self.hash.content_path()
    }

    /// Check whether this record describes an asset
    pub fn is_asset(&self) -> bool {
        self.kind == ArtifactKind::Asset
    }

    /// Check whether this record describes a library
    pub fn is_library(&self) -> bool {
        self.kind == ArtifactKind::Library
    }
}

impl fmt::Display for ArtifactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [hash={}, size={}]",
            self.identifier, self.hash, self.size
        )
    }
}
