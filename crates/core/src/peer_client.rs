// HTTP peer directory
//
// Fetches provider, category and appraiser records from the peer services.
// Each kind has a fixed path template under a shared base URL; `{id}` is the
// only parameter. A successful response with an empty or `null` body means
// the peer has no such record.

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{FormError, Result};
use crate::peer::{Appraiser, Category, PeerKind, Provider};
use crate::traits::PeerDirectory;

pub const DEFAULT_PEER_BASE_URL: &str = "http://localhost:8086/api/empresa";
pub const DEFAULT_PROVIDER_PATH: &str = "/proveedor/findbyid/{id}";
pub const DEFAULT_CATEGORY_PATH: &str = "/categoria/find/{id}";
pub const DEFAULT_APPRAISER_PATH: &str = "/perito/findbyid/{id}";

/// Endpoint configuration for the peer services
#[derive(Debug, Clone, PartialEq)]
pub struct PeerDirectoryConfig {
    /// Base URL shared by all peer endpoints
    pub base_url: String,
    /// Path template for provider lookups
    pub provider_path: String,
    /// Path template for category lookups
    pub category_path: String,
    /// Path template for appraiser lookups
    pub appraiser_path: String,
    /// Per-request timeout. None leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for PeerDirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PEER_BASE_URL.to_string(),
            provider_path: DEFAULT_PROVIDER_PATH.to_string(),
            category_path: DEFAULT_CATEGORY_PATH.to_string(),
            appraiser_path: DEFAULT_APPRAISER_PATH.to_string(),
            timeout: None,
        }
    }
}

impl PeerDirectoryConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `PEER_BASE_URL`: Base URL (default: http://localhost:8086/api/empresa)
    /// - `PEER_PROVIDER_PATH`: Provider path template (default: /proveedor/findbyid/{id})
    /// - `PEER_CATEGORY_PATH`: Category path template (default: /categoria/find/{id})
    /// - `PEER_APPRAISER_PATH`: Appraiser path template (default: /perito/findbyid/{id})
    /// - `PEER_TIMEOUT_SECS`: Request timeout in whole seconds, 0 for none (default: none)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match get("PEER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid PEER_TIMEOUT_SECS: {}", raw))?;
                (secs > 0).then_some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            base_url: get("PEER_BASE_URL").unwrap_or(defaults.base_url),
            provider_path: get("PEER_PROVIDER_PATH").unwrap_or(defaults.provider_path),
            category_path: get("PEER_CATEGORY_PATH").unwrap_or(defaults.category_path),
            appraiser_path: get("PEER_APPRAISER_PATH").unwrap_or(defaults.appraiser_path),
            timeout,
        })
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL for one peer record
    pub fn url_for(&self, kind: PeerKind, id: i64) -> String {
        let template = match kind {
            PeerKind::Provider => &self.provider_path,
            PeerKind::Category => &self.category_path,
            PeerKind::Appraiser => &self.appraiser_path,
        };
        let path = template.replace("{id}", &id.to_string());
        if path.starts_with('/') {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), path)
        }
    }
}

/// Peer directory backed by the peer services' HTTP endpoints
pub struct HttpPeerDirectory {
    config: PeerDirectoryConfig,
    http: reqwest::Client,
}

impl HttpPeerDirectory {
    pub fn new(config: PeerDirectoryConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: PeerKind, id: i64) -> Result<Option<T>> {
        let url = self.config.url_for(kind, id);
        tracing::debug!(peer = %kind, peer_id = id, url = %url, "Fetching peer record");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FormError::peer(kind, id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FormError::peer(
                kind,
                id,
                format!("HTTP {}: {}", status.as_u16(), message),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FormError::peer(kind, id, e.to_string()))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<T>>(&body)
            .map_err(|e| FormError::peer(kind, id, format!("invalid response body: {}", e)))
    }
}

#[async_trait]
impl PeerDirectory for HttpPeerDirectory {
    async fn fetch_provider(&self, id: i64) -> Result<Option<Provider>> {
        self.fetch(PeerKind::Provider, id).await
    }

    async fn fetch_category(&self, id: i64) -> Result<Option<Category>> {
        self.fetch(PeerKind::Category, id).await
    }

    async fn fetch_appraiser(&self, id: i64) -> Result<Option<Appraiser>> {
        self.fetch(PeerKind::Appraiser, id).await
    }
}
