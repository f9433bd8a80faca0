//! # sip-core
//!
//! Core types and utilities shared across the sip crates.
//!
//! This crate provides:
//! - `PackageRecord`, the trusted-registry entry format
//! - `Ecosystem`, the registries a record can come from
//! - `SipError` for unified error handling
//! - Date helpers for review stamps

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{SipError, SipResult};
pub use types::{Ecosystem, PackageRecord};
