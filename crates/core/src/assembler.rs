// Mapping between wire shapes and stored forms
//
// Requests are validated against the status table and turned into stored
// forms; enriched forms are narrowed into views. Peer ids are copied as-is,
// their existence is only discovered at enrichment time.

use chrono::Utc;
use std::sync::Arc;

use crate::enrichment::EnrichedForm;
use crate::error::{FormError, Result};
use crate::form::{Form, FormDraft, Status};
use crate::peer::{Appraiser, Category, Provider};
use crate::traits::FormStore;
use crate::views::{
    AppraiserView, CategoryView, FormRequest, FormView, ProviderView, StatusView,
};

pub struct FormAssembler {
    store: Arc<dyn FormStore>,
}

impl FormAssembler {
    pub fn new(store: Arc<dyn FormStore>) -> Self {
        Self { store }
    }

    /// Build a new, unsaved form from a request
    pub async fn draft_from_request(&self, req: FormRequest) -> Result<FormDraft> {
        let status = self.resolve_status(req.status_id).await?;

        Ok(FormDraft {
            date: req.date.unwrap_or_else(Utc::now),
            number: req.number,
            evaluation: req.evaluation,
            status,
            provider_id: req.provider_id,
            category_id: req.category_id,
            appraiser_id: req.appraiser_id,
        })
    }

    /// Overwrite every field of a stored form with the request
    ///
    /// The status is resolved first; nothing is built when it does not exist.
    pub async fn apply_update_request(&self, existing: &Form, req: FormRequest) -> Result<Form> {
        let status = self.resolve_status(req.status_id).await?;

        Ok(Form {
            id: existing.id,
            date: req.date.unwrap_or_else(Utc::now),
            number: req.number,
            evaluation: req.evaluation,
            status,
            provider_id: req.provider_id,
            category_id: req.category_id,
            appraiser_id: req.appraiser_id,
        })
    }

    async fn resolve_status(&self, status_id: i64) -> Result<Status> {
        self.store
            .get_status(status_id)
            .await?
            .ok_or(FormError::StatusNotFound(status_id))
    }

    /// Project an enriched form onto its outward view
    pub fn to_view(enriched: &EnrichedForm) -> FormView {
        let form = &enriched.form;

        FormView {
            id: form.id,
            date: form.date,
            number: form.number.clone(),
            evaluation: form.evaluation.clone(),
            status: Some(status_view(&form.status)),
            provider: enriched
                .provider
                .resolved()
                .map(|p| provider_view(form.provider_id, p)),
            category: enriched
                .category
                .resolved()
                .map(|c| category_view(form.category_id, c)),
            appraiser: enriched
                .appraiser
                .resolved()
                .map(|a| appraiser_view(form.appraiser_id, a)),
            unavailable_peers: enriched.unavailable_peers(),
        }
    }
}

fn status_view(status: &Status) -> StatusView {
    StatusView {
        id: status.id,
        name: status.name.clone(),
    }
}

// Sub-view ids are the form's references, so a peer body without `id` still
// reports the record that was asked for.

// Contact fields come from the provider record itself, never from the appraiser.
fn provider_view(id: i64, provider: &Provider) -> ProviderView {
    ProviderView {
        id,
        name: provider.name.clone(),
        phone: provider.phone.clone(),
        address: provider.address.clone(),
    }
}

fn category_view(id: i64, category: &Category) -> CategoryView {
    CategoryView {
        id,
        description: category.description.clone(),
    }
}

fn appraiser_view(id: i64, appraiser: &Appraiser) -> AppraiserView {
    AppraiserView {
        id,
        name: appraiser.name.clone(),
        phone: appraiser.phone.clone(),
        address: appraiser.address.clone(),
    }
}
