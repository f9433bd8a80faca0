//! Core data types shared by the sip crates.
//!
//! - Package records as stored in the trusted registry
//! - Ecosystems a record can be fetched from

pub mod ecosystem;
pub mod package;

// Re-export all public types
pub use ecosystem::Ecosystem;
pub use package::{PackageRecord, HASH_PREFIX};
