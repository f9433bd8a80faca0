//! Registry response to [`PackageRecord`] normalization.
//!
//! Pure functions over the typed API responses. The client feeds them
//! whatever it fetched; nothing here touches the network or the clock.

use sip_core::{PackageRecord, SipError};
use tracing::debug;

use crate::api::{CrateInfo, CrateVersion, PypiProject, ReleaseFile};
use crate::RegistryResult;

/// `project_urls` labels consulted for a PyPI source URL, in order
pub const SOURCE_URL_LABELS: [&str; 4] = ["Homepage", "Source", "Repository", "Source Code"];

/// Run-wide values stamped onto every record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStamp {
    pub trust_score: f64,
    pub endorsed_by: String,
    pub last_reviewed: String,
}

/// Pick the sdist if there is one, otherwise the first file as listed
pub fn select_release_file(files: &[ReleaseFile]) -> Option<&ReleaseFile> {
    files.iter().find(|f| f.is_sdist()).or_else(|| files.first())
}

/// Best-effort project URL of a PyPI project
///
/// Labelled `project_urls` win over `home_page`; `fallback` is used when
/// neither yields a usable URL.
pub fn resolve_pypi_source(project: &PypiProject, fallback: String) -> String {
    let Some(info) = project.info.as_ref() else {
        return fallback;
    };

    SOURCE_URL_LABELS
        .iter()
        .find_map(|label| info.project_url(label))
        .or_else(|| info.home_page())
        .map(str::to_string)
        .unwrap_or(fallback)
}

/// Best-effort project URL of a crate
pub fn resolve_crate_source(info: &CrateInfo, fallback: String) -> String {
    info.repository()
        .or_else(|| info.homepage())
        .map(str::to_string)
        .unwrap_or(fallback)
}

/// Build a record from a PyPI project response
pub fn pypi_record(
    name: &str,
    project: &PypiProject,
    stamp: &RecordStamp,
    fallback_source: String,
) -> RegistryResult<PackageRecord> {
    let version = project
        .info
        .as_ref()
        .and_then(|info| info.version())
        .ok_or_else(|| SipError::missing_field(name, "info.version"))?;

    let file = select_release_file(project.release_files(version)).ok_or_else(|| {
        SipError::NotFound {
            package: name.to_string(),
            version: version.to_string(),
        }
    })?;
    debug!(
        "{}=={}: using {} ({})",
        name,
        version,
        file.filename.as_deref().unwrap_or("<unnamed>"),
        file.packagetype.as_deref().unwrap_or("unknown type")
    );

    let digest = file
        .sha256()
        .ok_or_else(|| SipError::missing_field(name, "digests.sha256"))?;

    Ok(PackageRecord {
        name: name.to_string(),
        version: version.to_string(),
        hash: PackageRecord::sha256_hash(digest),
        trust_score: stamp.trust_score,
        endorsed_by: vec![stamp.endorsed_by.clone()],
        last_reviewed: stamp.last_reviewed.clone(),
        source: resolve_pypi_source(project, fallback_source),
    })
}

/// Build a record from the two crates.io responses
pub fn crate_record(
    name: &str,
    info: &CrateInfo,
    version: &str,
    release: &CrateVersion,
    stamp: &RecordStamp,
    fallback_source: String,
) -> RegistryResult<PackageRecord> {
    let checksum = release
        .checksum()
        .ok_or_else(|| SipError::missing_field(name, "version.checksum"))?;

    Ok(PackageRecord {
        name: name.to_string(),
        version: version.to_string(),
        hash: PackageRecord::sha256_hash(checksum),
        trust_score: stamp.trust_score,
        endorsed_by: vec![stamp.endorsed_by.clone()],
        last_reviewed: stamp.last_reviewed.clone(),
        source: resolve_crate_source(info, fallback_source),
    })
}
