//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a temporary
//! content-addressed store populated with real objects, and helpers for
//! declaring intact, corrupted, and absent artifacts.

use launchpad_core::{ArtifactKind, ArtifactRecord, ContentHash};
use launchpad_verify::ObjectStore;
use sha1::{Digest, Sha1};
use std::fs;
use tempfile::TempDir;

pub mod fixtures;

/// A temporary content-addressed store for one test
pub struct TestStore {
    // Held so the directory outlives the store handle
    _dir: TempDir,
    pub store: ObjectStore,
}

impl TestStore {
    /// Create an empty store in a fresh temporary directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = ObjectStore::new(dir.path());
        Self { _dir: dir, store }
    }

    /// Write an object at its content address and return its hash
    pub fn put_object(&self, contents: &[u8]) -> ContentHash {
        let hex = sha1_hex(contents);
        let dir = self.store.root().join(&hex[..2]);
        fs::create_dir_all(&dir).expect("Failed to create object dir");
        fs::write(dir.join(&hex), contents).expect("Failed to write object");
        ContentHash::new(hex).expect("Computed hash is valid")
    }

    /// Declare an artifact whose object is present and intact
    pub fn intact_artifact(
        &self,
        kind: ArtifactKind,
        identifier: &str,
        contents: &[u8],
    ) -> ArtifactRecord {
        let hash = self.put_object(contents);
        ArtifactRecord::new(kind, identifier, hash, contents.len() as i64)
            .expect("Fixture record is valid")
    }

    /// Overwrite the object behind a record with different bytes
    pub fn corrupt_object(&self, record: &ArtifactRecord, contents: &[u8]) {
        fs::write(self.store.object_path(&record.hash), contents)
            .expect("Failed to corrupt object");
    }

    /// Delete the object behind a record
    pub fn remove_object(&self, record: &ArtifactRecord) {
        fs::remove_file(self.store.object_path(&record.hash))
            .expect("Failed to remove object");
    }
}

/// Declare an artifact whose object was never written to the store
pub fn absent_artifact(kind: ArtifactKind, identifier: &str, contents: &[u8]) -> ArtifactRecord {
    let hash = ContentHash::new(sha1_hex(contents)).expect("Computed hash is valid");
    ArtifactRecord::new(kind, identifier, hash, contents.len() as i64)
        .expect("Fixture record is valid")
}

/// Lowercase hex SHA-1 of a byte slice
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
