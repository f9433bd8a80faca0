//! Package ecosystems a registry fetch can target.

use std::fmt;
use std::str::FromStr;

/// Package ecosystem backed by a public registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ecosystem {
    /// PyPI
    #[default]
    Python,
    /// crates.io
    Rust,
}

impl Ecosystem {
    /// Default registry base URL
    pub fn default_registry_url(&self) -> &'static str {
        match self {
            Ecosystem::Python => "https://pypi.org",
            Ecosystem::Rust => "https://crates.io",
        }
    }

    /// Marker recorded in `endorsed_by` for records produced by a bulk fetch
    pub fn endorsement(&self) -> &'static str {
        match self {
            Ecosystem::Python => "pypi-bulk-fetch",
            Ecosystem::Rust => "crates-bulk-fetch",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Python => "python",
            Ecosystem::Rust => "rust",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ecosystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" | "pypi" => Ok(Ecosystem::Python),
            "rust" | "rs" | "crates" => Ok(Ecosystem::Rust),
            other => Err(format!(
                "unsupported ecosystem '{}' (supported: python, rust)",
                other
            )),
        }
    }
}
