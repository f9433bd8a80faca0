//! Terminal color support for diagnostics.
//!
//! Diagnostics go to stderr, so only stderr decides. `NO_COLOR` always wins.

use std::env;
use std::io::{self, IsTerminal};

/// Color support detection and formatting
#[derive(Debug, Clone, Copy)]
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        Self {
            enabled: env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal(),
        }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.paint("32", text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint("33", text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }

    /// Format text as dim/gray
    pub fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_plain() {
        let colors = ColorSupport::disabled();
        assert_eq!(colors.red("error"), "error");
        assert_eq!(colors.dim("note"), "note");
    }

    #[test]
    fn test_enabled_wraps_ansi() {
        let colors = ColorSupport { enabled: true };
        assert_eq!(colors.green("ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(colors.yellow("warn"), "\x1b[33mwarn\x1b[0m");
    }
}
