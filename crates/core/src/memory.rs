// In-memory implementations for testing
//
// These implementations keep all data in memory, making them useful for:
// - Unit tests of enrichment and assembly
// - Simulating peer outages without a network

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{FormError, Result};
use crate::form::{Form, FormDraft, Status};
use crate::peer::{Appraiser, Category, PeerKind, Provider};
use crate::traits::{FormStore, PeerDirectory};

// ============================================================================
// InMemoryPeerDirectory - Peer records held in memory
// ============================================================================

#[derive(Debug, Default)]
struct PeerState {
    providers: HashMap<i64, Provider>,
    categories: HashMap<i64, Category>,
    appraisers: HashMap<i64, Appraiser>,
    failing: HashSet<PeerKind>,
    calls: Vec<(PeerKind, i64)>,
}

/// In-memory peer directory
///
/// Unknown ids resolve to `Ok(None)`. A peer kind marked as failing returns
/// `PeerUnavailable` for every id. Every fetch is recorded in call order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPeerDirectory {
    state: Arc<RwLock<PeerState>>,
}

impl InMemoryPeerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_provider(&self, provider: Provider) {
        self.state
            .write()
            .await
            .providers
            .insert(provider.id, provider);
    }

    pub async fn add_category(&self, category: Category) {
        self.state
            .write()
            .await
            .categories
            .insert(category.id, category);
    }

    pub async fn add_appraiser(&self, appraiser: Appraiser) {
        self.state
            .write()
            .await
            .appraisers
            .insert(appraiser.id, appraiser);
    }

    /// Make every fetch of this kind fail
    pub async fn fail(&self, kind: PeerKind) {
        self.state.write().await.failing.insert(kind);
    }

    /// Fetches issued so far, in order
    pub async fn calls(&self) -> Vec<(PeerKind, i64)> {
        self.state.read().await.calls.clone()
    }

    async fn record(&self, kind: PeerKind, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push((kind, id));
        if state.failing.contains(&kind) {
            return Err(FormError::peer(kind, id, "simulated outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl PeerDirectory for InMemoryPeerDirectory {
    async fn fetch_provider(&self, id: i64) -> Result<Option<Provider>> {
        self.record(PeerKind::Provider, id).await?;
        Ok(self.state.read().await.providers.get(&id).cloned())
    }

    async fn fetch_category(&self, id: i64) -> Result<Option<Category>> {
        self.record(PeerKind::Category, id).await?;
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn fetch_appraiser(&self, id: i64) -> Result<Option<Appraiser>> {
        self.record(PeerKind::Appraiser, id).await?;
        Ok(self.state.read().await.appraisers.get(&id).cloned())
    }
}

// ============================================================================
// InMemoryFormStore - Forms and statuses held in memory
// ============================================================================

#[derive(Debug, Default)]
struct StoreState {
    forms: HashMap<i64, Form>,
    statuses: HashMap<i64, Status>,
    next_id: i64,
}

/// In-memory form store with sequential ids starting at 1
#[derive(Debug, Default, Clone)]
pub struct InMemoryFormStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose status table holds the given rows
    pub async fn with_statuses(statuses: Vec<Status>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.write().await;
            for status in statuses {
                state.statuses.insert(status.id, status);
            }
        }
        store
    }
}

#[async_trait]
impl FormStore for InMemoryFormStore {
    async fn list_forms(&self) -> Result<Vec<Form>> {
        let mut forms: Vec<Form> = self.state.read().await.forms.values().cloned().collect();
        forms.sort_by_key(|f| f.id);
        Ok(forms)
    }

    async fn get_form(&self, id: i64) -> Result<Option<Form>> {
        Ok(self.state.read().await.forms.get(&id).cloned())
    }

    async fn create_form(&self, draft: FormDraft) -> Result<Form> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let form = draft.with_id(state.next_id);
        state.forms.insert(form.id, form.clone());
        Ok(form)
    }

    async fn update_form(&self, form: Form) -> Result<Option<Form>> {
        let mut state = self.state.write().await;
        match state.forms.get_mut(&form.id) {
            Some(existing) => {
                *existing = form.clone();
                Ok(Some(form))
            }
            None => Ok(None),
        }
    }

    async fn delete_form(&self, id: i64) -> Result<bool> {
        Ok(self.state.write().await.forms.remove(&id).is_some())
    }

    async fn get_status(&self, id: i64) -> Result<Option<Status>> {
        Ok(self.state.read().await.statuses.get(&id).cloned())
    }

    async fn list_statuses(&self) -> Result<Vec<Status>> {
        let mut statuses: Vec<Status> =
            self.state.read().await.statuses.values().cloned().collect();
        statuses.sort_by_key(|s| s.id);
        Ok(statuses)
    }
}
