//! Content-addressed object store handle
//!
//! The store wraps the objects subtree of a local installation directory and
//! resolves content addresses to absolute paths. It owns no files and creates
//! nothing; the directory belongs to the caller.

use launchpad_core::ContentHash;
use std::path::{Path, PathBuf};

use crate::error::{VerifyError, VerifyResult};

/// Handle to the content-addressed objects subtree on local storage
///
/// Objects live at `<root>/<hash[0:2]>/<hash>`. The logical content address
/// always uses `/`; platform-specific joining happens here via `Path::join`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStore {
    root: PathBuf,
}

impl ObjectStore {
    /// Create a store handle rooted at the given objects directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the absolute path of the object named by a content hash
    pub fn object_path(&self, hash: &ContentHash) -> PathBuf {
        self.root.join(hash.prefix()).join(hash.as_str())
    }

    /// Check that the store root is an accessible directory
    ///
    /// # Errors
    /// Returns `StorageUnavailable` when the root does not exist or is not a
    /// directory. This is a configuration error, distinct from any per-file
    /// corruption.
    pub fn ensure_available(&self) -> VerifyResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(VerifyError::StorageUnavailable(self.root.clone()))
        }
    }
}
