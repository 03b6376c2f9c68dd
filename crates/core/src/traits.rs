// Core traits for pluggable backends
//
// These traits keep composition independent of where forms live and how
// peers are reached:
// - Database and in-memory implementations of FormStore
// - HTTP and in-memory implementations of PeerDirectory

use async_trait::async_trait;

use crate::error::Result;
use crate::form::{Form, FormDraft, Status};
use crate::peer::{Appraiser, Category, Provider};

// ============================================================================
// FormStore - Persistence for forms and the status reference table
// ============================================================================

/// Record store for forms and form statuses
#[async_trait]
pub trait FormStore: Send + Sync {
    /// All stored forms, ordered by id
    async fn list_forms(&self) -> Result<Vec<Form>>;

    /// Load a form by id
    async fn get_form(&self, id: i64) -> Result<Option<Form>>;

    /// Insert a new form; the store assigns the id
    async fn create_form(&self, draft: FormDraft) -> Result<Form>;

    /// Overwrite every field of an existing form
    ///
    /// Returns None when the form no longer exists.
    async fn update_form(&self, form: Form) -> Result<Option<Form>>;

    /// Delete a form by id. Returns whether a row was removed.
    async fn delete_form(&self, id: i64) -> Result<bool>;

    /// Look up a status by id
    async fn get_status(&self, id: i64) -> Result<Option<Status>>;

    /// The whole status reference table, ordered by id
    async fn list_statuses(&self) -> Result<Vec<Status>>;
}

// ============================================================================
// PeerDirectory - Fetches records owned by peer services
// ============================================================================

/// Fetch-by-id access to provider, category and appraiser records
///
/// `Ok(None)` means the peer answered successfully without a record.
/// Transport failures, non-success statuses and undecodable bodies are errors.
#[async_trait]
pub trait PeerDirectory: Send + Sync {
    async fn fetch_provider(&self, id: i64) -> Result<Option<Provider>>;

    async fn fetch_category(&self, id: i64) -> Result<Option<Category>>;

    async fn fetch_appraiser(&self, id: i64) -> Result<Option<Appraiser>>;
}
