//! Streaming integrity verification of content-addressed objects
//!
//! A file is valid when it exists at its content address, its byte length
//! matches the declared size, and the SHA-1 of its contents matches the
//! declared hash. The size check runs before any hashing so obviously-wrong
//! files cost no read I/O.

use launchpad_core::{ArtifactRecord, ContentHash, SHA1_LENGTH};
use sha1::{Digest, Sha1};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::store::ObjectStore;

/// Read buffer size for streaming digest computation
const DIGEST_BUFFER_SIZE: usize = 8 * 1024;

/// Outcome of verifying one object against its declared size and hash
///
/// The boolean API collapses every non-`Valid` outcome to "invalid"; callers
/// that need diagnostics use this enum directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    /// File exists, size matches, hash matches
    Valid,
    /// No regular file exists at the content address
    Missing,
    /// File exists but its byte length differs from the declared size
    SizeMismatch,
    /// File exists with the declared size but its contents hash differently
    HashMismatch,
    /// The file could not be opened or read
    IoError,
}

impl VerificationOutcome {
    /// Collapse the outcome to the coarse boolean contract
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid)
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Missing => write!(f, "missing"),
            Self::SizeMismatch => write!(f, "size_mismatch"),
            Self::HashMismatch => write!(f, "hash_mismatch"),
            Self::IoError => write!(f, "io_error"),
        }
    }
}

/// Verify the object named by `expected_hash`, reporting the detailed outcome
///
/// Resolves the content address under the store root, then checks in order:
/// regular-file existence, byte length, streaming SHA-1 digest. Memory use is
/// constant regardless of file size. I/O failures while reading are absorbed
/// into `IoError` rather than propagated; integrity callers only need to know
/// whether to (re)fetch.
pub fn check_object(
    store: &ObjectStore,
    expected_size: u64,
    expected_hash: &ContentHash,
) -> VerificationOutcome {
    let path = store.object_path(expected_hash);

    let metadata = match path.metadata() {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(hash = %expected_hash, "object not found");
            return VerificationOutcome::Missing;
        }
        // A regular file occupying the prefix slot makes path resolution fail
        // with a directory-traversal error; no object can exist at this
        // content address, so it is absent rather than unreadable.
        Err(_) if path.parent().is_some_and(|prefix| prefix.is_file()) => {
            debug!(hash = %expected_hash, "prefix slot is not a directory");
            return VerificationOutcome::Missing;
        }
        Err(err) => {
            warn!(hash = %expected_hash, error = %err, "object metadata unreadable");
            return VerificationOutcome::IoError;
        }
    };

    if !metadata.is_file() {
        debug!(hash = %expected_hash, "content address is not a regular file");
        return VerificationOutcome::Missing;
    }

    if metadata.len() != expected_size {
        debug!(
            hash = %expected_hash,
            expected = expected_size,
            actual = metadata.len(),
            "object size mismatch"
        );
        return VerificationOutcome::SizeMismatch;
    }

    let digest = match file_digest(&path) {
        Ok(digest) => digest,
        Err(err) => {
            warn!(hash = %expected_hash, error = %err, "object unreadable");
            return VerificationOutcome::IoError;
        }
    };

    if hex::encode(digest) == expected_hash.as_str() {
        VerificationOutcome::Valid
    } else {
        debug!(hash = %expected_hash, "object hash mismatch");
        VerificationOutcome::HashMismatch
    }
}

/// Verify the object named by `expected_hash`, collapsed to a boolean
///
/// This is the primary contract: `true` iff the file exists at its content
/// address with the declared size and hash. Missing files, mismatches, and
/// I/O errors are all `false`.
pub fn verify_object(
    store: &ObjectStore,
    expected_size: u64,
    expected_hash: &ContentHash,
) -> bool {
    check_object(store, expected_size, expected_hash).is_valid()
}

/// Verify an artifact record, reporting the detailed outcome
pub fn check_artifact(store: &ObjectStore, record: &ArtifactRecord) -> VerificationOutcome {
    check_object(store, record.size, &record.hash)
}

/// Verify an artifact record, collapsed to a boolean
pub fn verify_artifact(store: &ObjectStore, record: &ArtifactRecord) -> bool {
    check_artifact(store, record).is_valid()
}

/// Compute the SHA-1 digest of a file by streaming fixed-size chunks
fn file_digest(path: &Path) -> io::Result<[u8; SHA1_LENGTH]> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; DIGEST_BUFFER_SIZE];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hasher.finalize().into())
}
