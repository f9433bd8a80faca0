//! Fatal error formatting with actionable suggestions.

use sip_core::error::SipError;
use super::colors::ColorSupport;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self::with_colors(ColorSupport::detect())
    }

    pub fn with_colors(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error with its cause chain and a suggestion when one exists
    pub fn format_error(&self, error: &SipError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            output.push('\n');
            source = err.source();
        }

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        output
    }

    /// One-line message for a package that failed inside a batch
    pub fn format_package_failure(&self, package: &str, error: &SipError) -> String {
        let mut line = format!("{} fetching {}: {}", self.colors.red("error"), package, error);

        let mut source = error.source();
        while let Some(err) = source {
            line.push_str(": ");
            line.push_str(&err.to_string());
            source = err.source();
        }

        line
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
