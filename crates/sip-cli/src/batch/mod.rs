//! Sequential batch fetching.
//!
//! Each name is fetched to completion before the next one starts. A
//! per-package failure is reported and counted; it never stops the batch.

use sip_core::{PackageRecord, SipError, SipResult};
use sip_registry::RegistryClient;
use tracing::{debug, info};

use crate::output::progress::BatchProgress;
use crate::output::OutputHandler;

/// Something that turns a package name into a record
#[allow(async_fn_in_trait)]
pub trait MetadataSource {
    async fn fetch(&self, name: &str, trust_score: f64) -> SipResult<PackageRecord>;
}

impl MetadataSource for RegistryClient {
    async fn fetch(&self, name: &str, trust_score: f64) -> SipResult<PackageRecord> {
        self.fetch_record(name, trust_score).await
    }
}

/// Outcome of a whole batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful records in input order
    pub records: Vec<PackageRecord>,
    pub success: usize,
    pub errors: usize,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.success + self.errors
    }
}

/// Fetch every name in order and collect the successful records
///
/// Fails only for an empty list or an error that is not tied to a single
/// package.
pub async fn run<S: MetadataSource>(
    source: &S,
    names: &[String],
    trust_score: f64,
    output: &OutputHandler,
) -> SipResult<BatchReport> {
    if names.is_empty() {
        return Err(SipError::usage("no packages found in file"));
    }

    info!("fetching {} packages", names.len());
    output.info(&format!("fetching metadata for {} packages...", names.len()));

    let mut progress = BatchProgress::new(names.len());
    let mut report = BatchReport::default();

    for name in names {
        output.progress(&progress.advance(name));

        match fetch_one(source, name, trust_score, output).await {
            Ok(record) => {
                report.records.push(record);
                report.success += 1;
            }
            Err(error) if error.is_per_package() => report.errors += 1,
            Err(error) => return Err(error),
        }
    }

    output.summary(report.success, report.errors);
    Ok(report)
}

/// Fetch one package, reporting a failure before handing it back
pub async fn fetch_one<S: MetadataSource>(
    source: &S,
    name: &str,
    trust_score: f64,
    output: &OutputHandler,
) -> SipResult<PackageRecord> {
    source.fetch(name, trust_score).await.map_err(|error| {
        debug!("{} failed ({})", name, error.kind());
        output.package_failure(name, &error);
        error
    })
}
