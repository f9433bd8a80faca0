//! Registry API response types
//!
//! Every field the registries may omit is an `Option`. Accessors hand back
//! `None` for absent, empty and placeholder values alike, so callers never
//! chain lookups on raw JSON.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

pub mod crates;

pub use crates::{CrateInfo, CrateResponse, CrateVersion, CrateVersionResponse};

/// Placeholder PyPI uses for unset metadata fields
pub const UNKNOWN_PLACEHOLDER: &str = "UNKNOWN";

/// Release file type preferred when picking a digest
pub const SDIST_PACKAGE_TYPE: &str = "sdist";

/// Treat empty strings and the `UNKNOWN` placeholder as absent
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != UNKNOWN_PLACEHOLDER)
}

/// Project metadata from `GET /pypi/{name}/json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PypiProject {
    /// Project-level metadata for the latest release
    pub info: Option<PypiInfo>,
    /// Release files keyed by version
    pub releases: Option<HashMap<String, Vec<ReleaseFile>>>,
}

/// The `info` object of a PyPI project response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PypiInfo {
    /// Latest version
    pub version: Option<String>,
    /// Legacy home page field
    pub home_page: Option<String>,
    /// Labelled project links ("Homepage", "Source", ...)
    pub project_urls: Option<HashMap<String, Option<String>>>,
}

/// One uploaded file of a release
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReleaseFile {
    /// `sdist`, `bdist_wheel`, ...
    pub packagetype: Option<String>,
    pub digests: Option<Digests>,
    pub filename: Option<String>,
}

/// Digests published for a release file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Digests {
    pub sha256: Option<String>,
}

impl PypiProject {
    /// Files uploaded for `version`, empty when the version is unknown
    pub fn release_files(&self, version: &str) -> &[ReleaseFile] {
        self.releases
            .as_ref()
            .and_then(|releases| releases.get(version))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl PypiInfo {
    pub fn version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Link stored under `label` in `project_urls`
    pub fn project_url(&self, label: &str) -> Option<&str> {
        let urls = self.project_urls.as_ref()?;
        present(urls.get(label)?.as_deref())
    }

    pub fn home_page(&self) -> Option<&str> {
        present(self.home_page.as_deref())
    }
}

impl ReleaseFile {
    pub fn is_sdist(&self) -> bool {
        self.packagetype.as_deref() == Some(SDIST_PACKAGE_TYPE)
    }

    pub fn sha256(&self) -> Option<&str> {
        self.digests
            .as_ref()?
            .sha256
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
