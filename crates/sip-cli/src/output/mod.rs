//! Terminal output.
//!
//! Diagnostics (progress, per-package failures, summary) go through
//! [`OutputHandler`] to stderr. The record array is the only thing ever
//! written to stdout, by [`emit_records`].

pub mod colors;
pub mod progress;
pub mod errors;

use std::cell::RefCell;
use std::io::{self, Write};

use sip_core::{PackageRecord, SipError, SipResult};

use colors::ColorSupport;
use errors::ErrorFormatter;

/// Diagnostic writer for a batch run
pub struct OutputHandler {
    colors: ColorSupport,
    sink: RefCell<Box<dyn Write>>,
}

impl OutputHandler {
    /// Handler writing to stderr
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(io::stderr()), ColorSupport::detect())
    }

    /// Handler writing to an arbitrary sink
    pub fn with_writer(sink: Box<dyn Write>, colors: ColorSupport) -> Self {
        Self {
            colors,
            sink: RefCell::new(sink),
        }
    }

    /// Print a plain diagnostic line
    pub fn info(&self, message: &str) {
        self.line(message);
    }

    /// Print a progress line
    pub fn progress(&self, line: &str) {
        self.line(&self.colors.dim(line));
    }

    /// Print the failure line for one package
    pub fn package_failure(&self, package: &str, error: &SipError) {
        let formatter = ErrorFormatter::with_colors(self.colors);
        self.line(&formatter.format_package_failure(package, error));
    }

    /// Print the end-of-batch summary, preceded by a blank line
    pub fn summary(&self, success: usize, errors: usize) {
        let text = format!("completed: {} success, {} errors", success, errors);
        let text = if errors == 0 {
            self.colors.green(&text)
        } else {
            self.colors.yellow(&text)
        };
        self.line("");
        self.line(&text);
    }

    fn line(&self, text: &str) {
        let mut sink = self.sink.borrow_mut();
        // Diagnostics are best-effort.
        let _ = writeln!(sink, "{}", text);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Write the records as one pretty-printed JSON array
///
/// The document is rendered fully before the single write, so a failure
/// never leaves a partial array behind.
pub fn emit_records<W: Write>(records: &[PackageRecord], mut writer: W) -> SipResult<()> {
    let document = serde_json::to_string_pretty(records).map_err(|e| {
        SipError::io(
            "failed to serialize records".to_string(),
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })?;

    writer
        .write_all(document.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| SipError::io("failed to write records to stdout".to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            hash: PackageRecord::sha256_hash("abc"),
            trust_score: 5.0,
            endorsed_by: vec!["pypi-bulk-fetch".to_string()],
            last_reviewed: "2024-06-01".to_string(),
            source: format!("https://pypi.org/project/{}/", name),
        }
    }

    #[test]
    fn test_emit_records_pretty_two_space() {
        let mut out = Vec::new();
        emit_records(&[record("requests")], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[\n  {\n    \"name\": \"requests\",\n    \"version\": \"1.0.0\","));
        assert!(text.contains("\"trust_score\": 5.0,"));
        assert!(text.contains("\"endorsed_by\": [\n      \"pypi-bulk-fetch\"\n    ],"));
        assert!(text.ends_with("  }\n]"));
    }

    #[test]
    fn test_emit_empty_array() {
        let mut out = Vec::new();
        emit_records(&[], &mut out).unwrap();
        assert_eq!(out, b"[]");
    }
}
