//! Effective run configuration.
//!
//! Built from the parsed command line, where every option can also come
//! from a `SIP_*` environment variable.

use std::path::PathBuf;
use std::time::Duration;

use sip_core::{Ecosystem, SipError, SipResult};
use sip_registry::{ClientConfig, RegistryClient};

use crate::Cli;

/// Range a trust score must fall in
pub const TRUST_SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Trust score given to every record unless overridden
pub const DEFAULT_TRUST_SCORE: f64 = 5.0;

/// Validated settings for one bulk fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub packages_file: PathBuf,
    pub ecosystem: Ecosystem,
    pub trust_score: f64,
    pub timeout: Duration,
    /// Registry base URL override
    pub registry_url: Option<String>,
}

impl FetchConfig {
    pub fn from_cli(cli: &Cli) -> SipResult<Self> {
        if !cli.trust_score.is_finite() || !TRUST_SCORE_RANGE.contains(&cli.trust_score) {
            return Err(SipError::usage(format!(
                "trust score {} is outside {}..={}",
                cli.trust_score,
                TRUST_SCORE_RANGE.start(),
                TRUST_SCORE_RANGE.end()
            )));
        }
        if cli.timeout == 0 {
            return Err(SipError::usage("timeout must be at least one second"));
        }

        Ok(Self {
            packages_file: cli.packages_file.clone(),
            ecosystem: cli.lang,
            trust_score: cli.trust_score,
            timeout: Duration::from_secs(cli.timeout),
            registry_url: cli
                .registry_url
                .as_ref()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::for_ecosystem(self.ecosystem);
        if let Some(url) = &self.registry_url {
            config.base_url = url.clone();
        }
        config.timeout = self.timeout;
        config
    }

    pub fn build_client(&self) -> SipResult<RegistryClient> {
        RegistryClient::with_config(self.ecosystem, self.client_config())
    }
}
