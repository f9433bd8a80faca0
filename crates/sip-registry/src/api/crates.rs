//! crates.io API response types

use serde::{Deserialize, Serialize};

use super::present;

/// Response of `GET /api/v1/crates/{name}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrateResponse {
    #[serde(rename = "crate")]
    pub krate: Option<CrateInfo>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrateInfo {
    pub max_version: Option<String>,
    pub repository: Option<String>,
    pub homepage: Option<String>,
}

/// Response of `GET /api/v1/crates/{name}/{version}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrateVersionResponse {
    pub version: Option<CrateVersion>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrateVersion {
    /// sha256 of the published `.crate` file
    pub checksum: Option<String>,
}

impl CrateInfo {
    pub fn max_version(&self) -> Option<&str> {
        present(self.max_version.as_deref())
    }

    pub fn repository(&self) -> Option<&str> {
        present(self.repository.as_deref())
    }

    pub fn homepage(&self) -> Option<&str> {
        present(self.homepage.as_deref())
    }
}

impl CrateVersion {
    pub fn checksum(&self) -> Option<&str> {
        present(self.checksum.as_deref())
    }
}
