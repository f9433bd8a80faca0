//! HTTP client for registry metadata endpoints

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use sip_core::{utils::review_date, Ecosystem, PackageRecord, SipError};

use crate::api::{CrateResponse, CrateVersionResponse, PypiProject};
use crate::normalize::{self, RecordStamp};
use crate::RegistryResult;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for a [`RegistryClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Registry base URL, e.g. `https://pypi.org`
    pub base_url: String,
    /// Bound on a single request, connect to last body byte
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Defaults for the public registry of `ecosystem`
    pub fn for_ecosystem(ecosystem: Ecosystem) -> Self {
        Self {
            base_url: ecosystem.default_registry_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("sip-bulk-fetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_ecosystem(Ecosystem::default())
    }
}

/// Metadata client for one registry
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client, reused across requests
    client: Client,
    ecosystem: Ecosystem,
    /// Base registry URL
    base_url: Url,
}

impl RegistryClient {
    /// Create a client for the public registry of `ecosystem`
    pub fn new(ecosystem: Ecosystem) -> RegistryResult<Self> {
        Self::with_config(ecosystem, ClientConfig::for_ecosystem(ecosystem))
    }

    /// Create a client with custom configuration
    pub fn with_config(ecosystem: Ecosystem, config: ClientConfig) -> RegistryResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SipError::usage(format!("invalid registry URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SipError::usage(format!(
                "invalid registry URL '{}': not a base URL",
                config.base_url
            )));
        }

        let client = ClientBuilder::new()
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| SipError::Usage {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            ecosystem,
            base_url,
        })
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Fetch one package and normalize it into a record
    ///
    /// Issues one request per registry endpoint the ecosystem needs and
    /// stamps the record with today's date.
    pub async fn fetch_record(&self, name: &str, trust_score: f64) -> RegistryResult<PackageRecord> {
        match self.ecosystem {
            Ecosystem::Python => {
                let project = self.fetch_pypi_project(name).await?;
                normalize::pypi_record(
                    name,
                    &project,
                    &self.stamp(trust_score),
                    self.pypi_project_page(name),
                )
            }
            Ecosystem::Rust => {
                let crate_response = self.fetch_crate(name).await?;
                let info = crate_response
                    .krate
                    .ok_or_else(|| SipError::missing_field(name, "crate"))?;
                let version = info
                    .max_version()
                    .ok_or_else(|| SipError::missing_field(name, "crate.max_version"))?
                    .to_string();

                let release = self
                    .fetch_crate_version(name, &version)
                    .await?
                    .version
                    .ok_or_else(|| SipError::missing_field(name, "version"))?;

                let fallback = self.crate_page(name, &version);
                normalize::crate_record(
                    name,
                    &info,
                    &version,
                    &release,
                    &self.stamp(trust_score),
                    fallback,
                )
            }
        }
    }

    /// Fetch `GET /pypi/{name}/json`
    pub async fn fetch_pypi_project(&self, name: &str) -> RegistryResult<PypiProject> {
        let url = self.endpoint(name, &["pypi", name, "json"])?;
        self.get_json(name, url).await
    }

    /// Fetch `GET /api/v1/crates/{name}`
    pub async fn fetch_crate(&self, name: &str) -> RegistryResult<CrateResponse> {
        let url = self.endpoint(name, &["api", "v1", "crates", name])?;
        self.get_json(name, url).await
    }

    /// Fetch `GET /api/v1/crates/{name}/{version}`
    pub async fn fetch_crate_version(
        &self,
        name: &str,
        version: &str,
    ) -> RegistryResult<CrateVersionResponse> {
        let url = self.endpoint(name, &["api", "v1", "crates", name, version])?;
        self.get_json(name, url).await
    }

    /// Project page used when a PyPI project advertises no URL
    pub fn pypi_project_page(&self, name: &str) -> String {
        format!("{}/project/{}/", self.base_url(), name)
    }

    fn crate_page(&self, name: &str, version: &str) -> String {
        format!("{}/crates/{}/{}", self.base_url(), name, version)
    }

    fn stamp(&self, trust_score: f64) -> RecordStamp {
        RecordStamp {
            trust_score,
            endorsed_by: self.ecosystem.endorsement().to_string(),
            last_reviewed: review_date(),
        }
    }

    /// Join percent-encoded path segments onto the base URL
    fn endpoint(&self, package: &str, segments: &[&str]) -> RegistryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SipError::Request {
                package: package.to_string(),
                message: format!("cannot build endpoint from {}", self.base_url),
                source: None,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode a JSON body
    async fn get_json<T: DeserializeOwned>(&self, package: &str, url: Url) -> RegistryResult<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    format!("failed to reach {}", url)
                };
                SipError::request(package, message, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SipError::Request {
                package: package.to_string(),
                message: format!("registry returned status {}", status),
                source: None,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            SipError::request(package, "failed to read response body".to_string(), e)
        })?;
        debug!("{}: {} bytes from {}", package, body.len(), url);

        serde_json::from_slice(&body).map_err(|e| {
            let message = if e.is_data() {
                "unexpected response structure".to_string()
            } else {
                "response body is not valid JSON".to_string()
            };
            SipError::parse(package, message, e)
        })
    }
}
