// Form service for business logic
//
// Each operation is a single linear flow: store, then enrichment, then
// projection into the wire view.

use evaluations_core::{
    EnrichmentPolicy, Enricher, FormAssembler, FormError, FormRequest, FormStore, FormView,
    PeerDirectory, Result,
};
use std::sync::Arc;
use tracing::Instrument;

pub struct FormService {
    store: Arc<dyn FormStore>,
    assembler: FormAssembler,
    enricher: Enricher,
}

impl FormService {
    pub fn new(
        store: Arc<dyn FormStore>,
        peers: Arc<dyn PeerDirectory>,
        policy: EnrichmentPolicy,
    ) -> Self {
        Self {
            assembler: FormAssembler::new(store.clone()),
            enricher: Enricher::new(peers, policy),
            store,
        }
    }

    pub async fn list(&self) -> Result<Vec<FormView>> {
        let span = tracing::info_span!("forms.list", "forms.count" = tracing::field::Empty);

        self.list_inner().instrument(span).await
    }

    async fn list_inner(&self) -> Result<Vec<FormView>> {
        let forms = self.store.list_forms().await?;
        tracing::Span::current().record("forms.count", forms.len());

        let enriched = self.enricher.enrich_all(forms).await?;
        Ok(enriched.iter().map(FormAssembler::to_view).collect())
    }

    pub async fn get(&self, id: i64) -> Result<FormView> {
        let span = tracing::info_span!("forms.get", "form.id" = id);

        self.get_inner(id).instrument(span).await
    }

    async fn get_inner(&self, id: i64) -> Result<FormView> {
        let form = self
            .store
            .get_form(id)
            .await?
            .ok_or(FormError::FormNotFound(id))?;
        let enriched = self.enricher.enrich(form).await?;
        Ok(FormAssembler::to_view(&enriched))
    }

    pub async fn create(&self, req: FormRequest) -> Result<FormView> {
        let span = tracing::info_span!(
            "forms.create",
            "form.number" = %req.number,
            "form.id" = tracing::field::Empty,
        );

        self.create_inner(req).instrument(span).await
    }

    async fn create_inner(&self, req: FormRequest) -> Result<FormView> {
        let draft = self.assembler.draft_from_request(req).await?;
        let form = self.store.create_form(draft).await?;
        let form_id = form.id;
        tracing::Span::current().record("form.id", form_id);
        tracing::info!(form_id, "Form created");

        match self.enricher.enrich(form).await {
            Ok(enriched) => Ok(FormAssembler::to_view(&enriched)),
            Err(e) => {
                tracing::warn!(
                    form_id,
                    error = %e,
                    "Form was persisted but enrichment failed"
                );
                Err(e)
            }
        }
    }

    pub async fn update(&self, id: i64, req: FormRequest) -> Result<FormView> {
        let span = tracing::info_span!("forms.update", "form.id" = id);

        self.update_inner(id, req).instrument(span).await
    }

    async fn update_inner(&self, id: i64, req: FormRequest) -> Result<FormView> {
        let existing = self
            .store
            .get_form(id)
            .await?
            .ok_or(FormError::FormNotFound(id))?;
        let form = self.assembler.apply_update_request(&existing, req).await?;
        let form = self
            .store
            .update_form(form)
            .await?
            .ok_or(FormError::FormNotFound(id))?;
        tracing::info!(form_id = id, "Form updated");

        match self.enricher.enrich(form).await {
            Ok(enriched) => Ok(FormAssembler::to_view(&enriched)),
            Err(e) => {
                tracing::warn!(
                    form_id = id,
                    error = %e,
                    "Form update was persisted but enrichment failed"
                );
                Err(e)
            }
        }
    }

    /// Delete a form; deleting an unknown id is not an error
    pub async fn delete(&self, id: i64) -> Result<()> {
        let existed = self.store.delete_form(id).await?;
        tracing::debug!(form_id = id, existed, "Form delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluations_core::memory::{InMemoryFormStore, InMemoryPeerDirectory};
    use evaluations_core::{Appraiser, Category, PeerKind, Provider, Status};

    fn request(number: &str, status_id: i64) -> FormRequest {
        FormRequest {
            date: None,
            number: number.to_string(),
            evaluation: "ok".to_string(),
            status_id,
            provider_id: 10,
            category_id: 20,
            appraiser_id: 30,
        }
    }

    async fn store() -> Arc<InMemoryFormStore> {
        Arc::new(
            InMemoryFormStore::with_statuses(vec![
                Status::new(1, "Pending"),
                Status::new(3, "Approved"),
            ])
            .await,
        )
    }

    async fn peers() -> Arc<InMemoryPeerDirectory> {
        let peers = InMemoryPeerDirectory::new();
        peers
            .add_provider(Provider {
                id: 10,
                name: Some("Acme".to_string()),
                phone: Some("555-0100".to_string()),
                address: Some("1 Main St".to_string()),
            })
            .await;
        peers
            .add_category(Category {
                id: 20,
                description: Some("Vehicles".to_string()),
            })
            .await;
        peers
            .add_appraiser(Appraiser {
                id: 30,
                name: Some("Jane".to_string()),
                phone: Some("555-0199".to_string()),
                address: None,
            })
            .await;
        Arc::new(peers)
    }

    fn service(
        store: &Arc<InMemoryFormStore>,
        peers: &Arc<InMemoryPeerDirectory>,
        policy: EnrichmentPolicy,
    ) -> FormService {
        FormService::new(store.clone(), peers.clone(), policy)
    }

    #[tokio::test]
    async fn test_create_returns_enriched_view() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);

        let view = svc.create(request("A-100", 1)).await.unwrap();

        assert_eq!(view.id, 1);
        assert_eq!(view.number, "A-100");
        let status = view.status.unwrap();
        assert_eq!(status.id, 1);
        assert_eq!(status.name, "Pending");
        let provider = view.provider.unwrap();
        assert_eq!(provider.id, 10);
        assert_eq!(provider.phone.as_deref(), Some("555-0100"));
        assert_eq!(view.category.unwrap().id, 20);
        assert_eq!(view.appraiser.unwrap().id, 30);
        assert!(view.unavailable_peers.is_empty());
    }

    #[tokio::test]
    async fn test_create_persists_even_when_peers_fail() {
        let store = store().await;
        let peers = peers().await;
        peers.fail(PeerKind::Provider).await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);

        let err = svc.create(request("A-100", 1)).await.unwrap_err();

        assert!(matches!(err, FormError::PeerUnavailable { .. }));
        let stored = store.get_form(1).await.unwrap();
        assert_eq!(stored.unwrap().number, "A-100");
    }

    #[tokio::test]
    async fn test_create_with_unknown_status_persists_nothing() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);

        let err = svc.create(request("A-100", 2)).await.unwrap_err();

        assert!(matches!(err, FormError::StatusNotFound(2)));
        assert!(store.list_forms().await.unwrap().is_empty());
        assert!(peers.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_form() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);

        let err = svc.get(42).await.unwrap_err();

        assert!(matches!(err, FormError::FormNotFound(42)));
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);
        let created = svc.create(request("A-100", 1)).await.unwrap();

        let mut req = request("B-200", 3);
        req.evaluation = "revised".to_string();
        req.provider_id = 11;
        let view = svc.update(created.id, req).await.unwrap();

        assert_eq!(view.id, created.id);
        assert_eq!(view.number, "B-200");
        assert_eq!(view.evaluation, "revised");
        assert_eq!(view.status.unwrap().name, "Approved");
        // Provider 11 is unknown to the peer service
        assert!(view.provider.is_none());
    }

    #[tokio::test]
    async fn test_update_with_unknown_status_leaves_form_unchanged() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);
        let created = svc.create(request("A-100", 1)).await.unwrap();
        let before = store.get_form(created.id).await.unwrap().unwrap();

        let err = svc.update(created.id, request("B-200", 99)).await.unwrap_err();

        assert!(matches!(err, FormError::StatusNotFound(99)));
        let after = store.get_form(created.id).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_unknown_form() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);

        let err = svc.update(7, request("B-200", 1)).await.unwrap_err();

        assert!(matches!(err, FormError::FormNotFound(7)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);
        let created = svc.create(request("A-100", 1)).await.unwrap();

        svc.delete(created.id).await.unwrap();
        svc.delete(created.id).await.unwrap();
        svc.delete(12345).await.unwrap();

        assert!(store.get_form(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_fails_fast_on_peer_outage() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::FailFast);
        svc.create(request("A-100", 1)).await.unwrap();
        peers.fail(PeerKind::Category).await;

        let err = svc.list().await.unwrap_err();

        assert!(matches!(
            err,
            FormError::PeerUnavailable {
                peer: PeerKind::Category,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_list_degrades_on_peer_outage() {
        let store = store().await;
        let peers = peers().await;
        let svc = service(&store, &peers, EnrichmentPolicy::Degrade);
        svc.create(request("A-100", 1)).await.unwrap();
        svc.create(request("A-101", 3)).await.unwrap();
        peers.fail(PeerKind::Provider).await;

        let views = svc.list().await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].number, "A-100");
        assert_eq!(views[1].number, "A-101");
        for view in &views {
            assert!(view.provider.is_none());
            assert!(view.category.is_some());
            assert_eq!(view.unavailable_peers, vec![PeerKind::Provider]);
        }
    }
}
