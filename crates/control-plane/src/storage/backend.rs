// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage, and
// exposes it to the core as a FormStore.

use anyhow::Result;
use async_trait::async_trait;
use evaluations_core::{Form, FormDraft, FormStore, Status};
use std::sync::Arc;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    /// Short name for health reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }

    /// Apply migrations (no-op for in-memory)
    pub async fn migrate(&self) -> Result<()> {
        match self {
            Self::Postgres(db) => db.migrate().await,
            Self::InMemory(_) => Ok(()),
        }
    }

    // ============================================
    // Form statuses
    // ============================================

    pub async fn get_status(&self, id: i64) -> Result<Option<StatusRow>> {
        match self {
            Self::Postgres(db) => db.get_status(id).await,
            Self::InMemory(db) => db.get_status(id).await,
        }
    }

    pub async fn list_statuses(&self) -> Result<Vec<StatusRow>> {
        match self {
            Self::Postgres(db) => db.list_statuses().await,
            Self::InMemory(db) => db.list_statuses().await,
        }
    }

    // ============================================
    // Forms
    // ============================================

    pub async fn list_forms(&self) -> Result<Vec<FormRow>> {
        match self {
            Self::Postgres(db) => db.list_forms().await,
            Self::InMemory(db) => db.list_forms().await,
        }
    }

    pub async fn get_form(&self, id: i64) -> Result<Option<FormRow>> {
        match self {
            Self::Postgres(db) => db.get_form(id).await,
            Self::InMemory(db) => db.get_form(id).await,
        }
    }

    pub async fn create_form(&self, input: UpsertFormRow) -> Result<FormRow> {
        match self {
            Self::Postgres(db) => db.create_form(input).await,
            Self::InMemory(db) => db.create_form(input).await,
        }
    }

    pub async fn update_form(&self, id: i64, input: UpsertFormRow) -> Result<Option<FormRow>> {
        match self {
            Self::Postgres(db) => db.update_form(id, input).await,
            Self::InMemory(db) => db.update_form(id, input).await,
        }
    }

    pub async fn delete_form(&self, id: i64) -> Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_form(id).await,
            Self::InMemory(db) => db.delete_form(id).await,
        }
    }
}

#[async_trait]
impl FormStore for StorageBackend {
    async fn list_forms(&self) -> evaluations_core::Result<Vec<Form>> {
        let rows = StorageBackend::list_forms(self).await?;
        Ok(rows.into_iter().map(Form::from).collect())
    }

    async fn get_form(&self, id: i64) -> evaluations_core::Result<Option<Form>> {
        let row = StorageBackend::get_form(self, id).await?;
        Ok(row.map(Form::from))
    }

    async fn create_form(&self, draft: FormDraft) -> evaluations_core::Result<Form> {
        let row = StorageBackend::create_form(self, UpsertFormRow::from(&draft)).await?;
        Ok(row.into())
    }

    async fn update_form(&self, form: Form) -> evaluations_core::Result<Option<Form>> {
        let row = StorageBackend::update_form(self, form.id, UpsertFormRow::from(&form)).await?;
        Ok(row.map(Form::from))
    }

    async fn delete_form(&self, id: i64) -> evaluations_core::Result<bool> {
        Ok(StorageBackend::delete_form(self, id).await?)
    }

    async fn get_status(&self, id: i64) -> evaluations_core::Result<Option<Status>> {
        let row = StorageBackend::get_status(self, id).await?;
        Ok(row.map(Status::from))
    }

    async fn list_statuses(&self) -> evaluations_core::Result<Vec<Status>> {
        let rows = StorageBackend::list_statuses(self).await?;
        Ok(rows.into_iter().map(Status::from).collect())
    }
}
