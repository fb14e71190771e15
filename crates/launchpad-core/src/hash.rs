//! Content hash representation and content-address derivation
//!
//! This module provides the canonical SHA-1 content hash type used both as an
//! integrity check value and as the content-addressed storage key. The storage
//! layout contract places every object at `<root>/<hash[0:2]>/<hash>`, so the
//! relative address of an object is a pure function of its hash.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LaunchpadError, Result};

/// SHA-1 of empty input, the expected hash of any zero-byte object
pub const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// Length of a SHA-1 digest in bytes
pub const SHA1_LENGTH: usize = 20;

/// Length of a SHA-1 digest in hexadecimal characters
pub const SHA1_HEX_LENGTH: usize = SHA1_LENGTH * 2;

/// Canonical lowercase hex SHA-1 content hash
///
/// The hash doubles as the content-addressed storage key: the object it names
/// lives at `<prefix>/<hash>` relative to the objects subtree, where the
/// prefix is the first two hash characters.
///
/// Construction normalizes ASCII case and validates length and alphabet, so a
/// constructed value is always exactly 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash {
    value: String,
}

impl ContentHash {
    /// Create a content hash with validation
    ///
    /// The input is normalized to lowercase before validation.
    ///
    /// # Errors
    /// Returns `InvalidHashFormat` if the input is not exactly 40 hexadecimal
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let normalized = value.into().to_ascii_lowercase();

        if normalized.len() != SHA1_HEX_LENGTH {
            return Err(LaunchpadError::InvalidHashFormat(format!(
                "expected {} characters, got {}",
                SHA1_HEX_LENGTH,
                normalized.len()
            )));
        }

        if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LaunchpadError::InvalidHashFormat(
                "hash must be a hexadecimal string".to_string(),
            ));
        }

        Ok(Self { value: normalized })
    }

    /// Get the hash as a lowercase hex string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the two-character content-address prefix
    pub fn prefix(&self) -> &str {
        &self.value[..2]
    }

    /// Derive the relative content address: `<prefix>/<hash>`
    ///
    /// Uses `/` as a fixed logical separator regardless of platform; the
    /// storage layer is responsible for platform-specific joining.
    pub fn content_path(&self) -> String {
        format!("{}/{}", self.prefix(), self.value)
    }

    /// Check whether this is the hash of empty input
    pub fn is_empty_input(&self) -> bool {
        self.value == EMPTY_SHA1
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for ContentHash {
    type Err = LaunchpadError;

    fn from_str(s: &str) -> Result<Self> {
        ContentHash::new(s)
    }
}
