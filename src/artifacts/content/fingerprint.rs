//! Content fingerprint (SHA-256)
//!
//! Two entries are considered equal when their fingerprints and sizes match,
//! so entry bytes never have to be compared directly.

use crate::artifacts::content::SHORT_FINGERPRINT_LENGTH;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Lowercase hexadecimal SHA-256 digest of an entry's raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash raw content
    pub fn of(data: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(data)))
    }

    /// Abbreviated form for console output
    pub fn to_short(&self) -> &str {
        &self.0[..SHORT_FINGERPRINT_LENGTH]
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
