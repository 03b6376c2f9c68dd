// Server configuration loaded from the environment
//
// Peer endpoints are configured separately through PeerDirectoryConfig.

use anyhow::{anyhow, Context, Result};
use evaluations_core::EnrichmentPolicy;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// PostgreSQL connection string; None runs the in-memory dev store
    pub database_url: Option<String>,
    pub bind_addr: String,
    /// Prefix for API routes, e.g. "/api" gives /api/v1/forms
    pub api_prefix: String,
    /// Only needed when the UI is served from a different origin than the API
    pub cors_allowed_origins: Vec<String>,
    pub enrichment_policy: EnrichmentPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_prefix: String::new(),
            cors_allowed_origins: Vec::new(),
            enrichment_policy: EnrichmentPolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let enrichment_policy = match get("ENRICHMENT_POLICY") {
            Some(raw) => raw
                .parse::<EnrichmentPolicy>()
                .map_err(|e| anyhow!(e))
                .context("Invalid ENRICHMENT_POLICY")?,
            None => EnrichmentPolicy::default(),
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url: get("DATABASE_URL"),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            api_prefix: get("API_PREFIX").unwrap_or_default(),
            cors_allowed_origins,
            enrichment_policy,
        })
    }
}
