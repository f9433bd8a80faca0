//! Trusted-registry package records.
//!
//! A [`PackageRecord`] is one entry of the sip trusted registry. Field order
//! is the serialized order.

use serde::{Deserialize, Serialize};

/// Prefix carried by every record hash
pub const HASH_PREFIX: &str = "sha256:";

/// One normalized trusted-registry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// `sha256:<hex digest>` of the selected release file
    pub hash: String,
    pub trust_score: f64,
    pub endorsed_by: Vec<String>,
    /// ISO 8601 calendar date
    pub last_reviewed: String,
    pub source: String,
}

impl PackageRecord {
    /// Format a raw sha256 digest as a record hash
    pub fn sha256_hash(digest: &str) -> String {
        format!("{}{}", HASH_PREFIX, digest)
    }

    /// The digest part of the hash, if it carries the sha256 prefix
    pub fn sha256_digest(&self) -> Option<&str> {
        self.hash.strip_prefix(HASH_PREFIX)
    }
}
