// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: Ids are assigned sequentially starting at 1, like BIGSERIAL
//
// This implementation provides a PostgreSQL-compatible API backed by in-memory
// maps, allowing the control-plane to run without a database for development.

use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
pub struct InMemoryDatabase {
    statuses: RwLock<BTreeMap<i64, StatusRow>>,
    forms: RwLock<BTreeMap<i64, FormRow>>,
    form_sequence: AtomicI64,
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDatabase {
    /// Create a database whose status table holds the migration seed rows
    pub fn new() -> Self {
        Self::with_statuses(seed_statuses())
    }

    pub fn with_statuses(statuses: Vec<StatusRow>) -> Self {
        Self {
            statuses: RwLock::new(statuses.into_iter().map(|s| (s.id, s)).collect()),
            forms: RwLock::new(BTreeMap::new()),
            form_sequence: AtomicI64::new(0),
        }
    }

    // ============================================
    // Form statuses
    // ============================================

    pub async fn get_status(&self, id: i64) -> Result<Option<StatusRow>> {
        Ok(self.statuses.read().get(&id).cloned())
    }

    pub async fn list_statuses(&self) -> Result<Vec<StatusRow>> {
        Ok(self.statuses.read().values().cloned().collect())
    }

    // ============================================
    // Forms
    // ============================================

    pub async fn list_forms(&self) -> Result<Vec<FormRow>> {
        Ok(self.forms.read().values().cloned().collect())
    }

    pub async fn get_form(&self, id: i64) -> Result<Option<FormRow>> {
        Ok(self.forms.read().get(&id).cloned())
    }

    pub async fn create_form(&self, input: UpsertFormRow) -> Result<FormRow> {
        let status_name = self.status_name(input.status_id)?;
        let id = self.form_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Self::build_row(id, input, status_name);
        self.forms.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn update_form(&self, id: i64, input: UpsertFormRow) -> Result<Option<FormRow>> {
        let status_name = self.status_name(input.status_id)?;
        let mut forms = self.forms.write();
        if let Some(form) = forms.get_mut(&id) {
            *form = Self::build_row(id, input, status_name);
            return Ok(Some(form.clone()));
        }
        Ok(None)
    }

    pub async fn delete_form(&self, id: i64) -> Result<bool> {
        Ok(self.forms.write().remove(&id).is_some())
    }

    // Mirrors the foreign key on forms.status_id
    fn status_name(&self, status_id: i64) -> Result<String> {
        self.statuses
            .read()
            .get(&status_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| anyhow!("status {} violates forms_status_id_fkey", status_id))
    }

    fn build_row(id: i64, input: UpsertFormRow, status_name: String) -> FormRow {
        FormRow {
            id,
            date: input.date,
            number: input.number,
            evaluation: input.evaluation,
            status_id: input.status_id,
            status_name,
            provider_id: input.provider_id,
            category_id: input.category_id,
            appraiser_id: input.appraiser_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn input(number: &str, status_id: i64) -> UpsertFormRow {
        UpsertFormRow {
            date: Utc::now(),
            number: number.to_string(),
            evaluation: "ok".to_string(),
            status_id,
            provider_id: 10,
            category_id: 20,
            appraiser_id: 30,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_form() {
        let db = InMemoryDatabase::new();

        let form = db.create_form(input("A-100", 1)).await.unwrap();

        assert_eq!(form.id, 1);
        assert_eq!(form.status_name, "Pending");

        let fetched = db.get_form(form.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().number, "A-100");
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_list_is_ordered() {
        let db = InMemoryDatabase::new();

        for i in 0..3 {
            db.create_form(input(&format!("N-{}", i), 1)).await.unwrap();
        }

        let forms = db.list_forms().await.unwrap();
        let ids: Vec<i64> = forms.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let db = InMemoryDatabase::new();
        let form = db.create_form(input("A-100", 1)).await.unwrap();

        let updated = db
            .update_form(form.id, input("B-200", 3))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.number, "B-200");
        assert_eq!(updated.status_name, "Approved");
        assert!(db.update_form(99, input("C", 1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let db = InMemoryDatabase::new();

        assert!(db.create_form(input("A-100", 42)).await.is_err());
        assert!(db.list_forms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let db = InMemoryDatabase::new();
        let form = db.create_form(input("A-100", 1)).await.unwrap();

        assert!(db.delete_form(form.id).await.unwrap());
        assert!(!db.delete_form(form.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_statuses_are_seeded() {
        let db = InMemoryDatabase::new();

        let statuses = db.list_statuses().await.unwrap();

        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0].name, "Pending");
        assert!(db.get_status(5).await.unwrap().is_none());
    }
}
