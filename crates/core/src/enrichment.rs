// Enrichment of stored forms with peer records
//
// A stored form only carries peer ids. Enrichment fetches the provider,
// category and appraiser for those ids and attaches them. The three fetches
// run one after another, provider first.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{FormError, Result};
use crate::form::Form;
use crate::peer::{Appraiser, Category, PeerKind, PeerLookup, Provider};
use crate::traits::PeerDirectory;

/// How enrichment reacts to a failed peer fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichmentPolicy {
    /// The first failed fetch aborts the whole operation
    #[default]
    FailFast,
    /// A failed fetch is recorded as unavailable and enrichment continues
    Degrade,
}

impl FromStr for EnrichmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail_fast" | "fail-fast" | "failfast" => Ok(EnrichmentPolicy::FailFast),
            "degrade" => Ok(EnrichmentPolicy::Degrade),
            other => Err(format!("unknown enrichment policy: {}", other)),
        }
    }
}

impl fmt::Display for EnrichmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichmentPolicy::FailFast => f.write_str("fail_fast"),
            EnrichmentPolicy::Degrade => f.write_str("degrade"),
        }
    }
}

/// A stored form together with its peer records
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedForm {
    pub form: Form,
    pub provider: PeerLookup<Provider>,
    pub category: PeerLookup<Category>,
    pub appraiser: PeerLookup<Appraiser>,
}

impl EnrichedForm {
    /// A form with no peer data attached yet
    pub fn bare(form: Form) -> Self {
        Self {
            form,
            provider: PeerLookup::Missing,
            category: PeerLookup::Missing,
            appraiser: PeerLookup::Missing,
        }
    }

    /// Peer kinds whose fetch failed under the degrade policy
    pub fn unavailable_peers(&self) -> Vec<PeerKind> {
        let mut kinds = Vec::new();
        if self.provider.is_unavailable() {
            kinds.push(PeerKind::Provider);
        }
        if self.category.is_unavailable() {
            kinds.push(PeerKind::Category);
        }
        if self.appraiser.is_unavailable() {
            kinds.push(PeerKind::Appraiser);
        }
        kinds
    }
}

/// Attaches peer records to stored forms
pub struct Enricher {
    peers: Arc<dyn PeerDirectory>,
    policy: EnrichmentPolicy,
}

impl Enricher {
    pub fn new(peers: Arc<dyn PeerDirectory>, policy: EnrichmentPolicy) -> Self {
        Self { peers, policy }
    }

    /// Fetch and attach the provider, category and appraiser of a form
    pub async fn enrich(&self, form: Form) -> Result<EnrichedForm> {
        let outcome = self.peers.fetch_provider(form.provider_id).await;
        let provider = self.settle(PeerKind::Provider, form.provider_id, outcome)?;

        let outcome = self.peers.fetch_category(form.category_id).await;
        let category = self.settle(PeerKind::Category, form.category_id, outcome)?;

        let outcome = self.peers.fetch_appraiser(form.appraiser_id).await;
        let appraiser = self.settle(PeerKind::Appraiser, form.appraiser_id, outcome)?;

        Ok(EnrichedForm {
            form,
            provider,
            category,
            appraiser,
        })
    }

    /// Enrich forms one at a time, in the given order
    pub async fn enrich_all(&self, forms: Vec<Form>) -> Result<Vec<EnrichedForm>> {
        let mut enriched = Vec::with_capacity(forms.len());
        for form in forms {
            enriched.push(self.enrich(form).await?);
        }
        Ok(enriched)
    }

    fn settle<T>(
        &self,
        kind: PeerKind,
        id: i64,
        outcome: Result<Option<T>>,
    ) -> Result<PeerLookup<T>> {
        match outcome {
            Ok(record) => Ok(record.into()),
            Err(e) => match self.policy {
                EnrichmentPolicy::FailFast => Err(match e {
                    FormError::PeerUnavailable { .. } => e,
                    other => FormError::peer(kind, id, other.to_string()),
                }),
                EnrichmentPolicy::Degrade => {
                    tracing::warn!(
                        peer = %kind,
                        peer_id = id,
                        error = %e,
                        "Peer fetch failed, continuing without it"
                    );
                    Ok(PeerLookup::Unavailable)
                }
            },
        }
    }
}
