//! Registry metadata client for sip
//!
//! This crate fetches package metadata from PyPI and crates.io and turns it
//! into trusted-registry [`PackageRecord`](sip_core::PackageRecord)s.

pub mod client;
pub mod api;
pub mod normalize;

// Re-export main types
pub use client::{ClientConfig, RegistryClient, DEFAULT_TIMEOUT};
pub use api::{PypiInfo, PypiProject, ReleaseFile, Digests};
pub use normalize::{RecordStamp, SOURCE_URL_LABELS};

use sip_core::error::SipError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, SipError>;
