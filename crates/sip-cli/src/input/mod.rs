//! Package list reading.
//!
//! One name per line. Blank lines and lines starting with [`COMMENT_MARKER`]
//! (after trimming) are dropped; everything else is a package name.

use std::path::Path;

use sip_core::{SipError, SipResult};
use tracing::debug;

/// Leading character of a comment line
pub const COMMENT_MARKER: char = '#';

/// Whether a raw line names a package
pub fn is_package_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
}

/// The effective package list of a file's contents, in file order
pub fn parse_package_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| is_package_line(line))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Read and filter a package list file
pub fn read_package_names(path: &Path) -> SipResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SipError::usage(format!("cannot read file '{}': {}", path.display(), e))
    })?;

    let names = parse_package_list(&content);
    debug!("{}: {} package names", path.display(), names.len());
    Ok(names)
}

#[cfg(test)]
mod tests;
