// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use evaluations_core::{Form, FormDraft, Status};
use sqlx::FromRow;

// ============================================
// Form statuses (read-only reference table)
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct StatusRow {
    pub id: i64,
    pub name: String,
}

impl From<StatusRow> for Status {
    fn from(row: StatusRow) -> Self {
        Status {
            id: row.id,
            name: row.name,
        }
    }
}

/// Rows seeded into the status table by the initial migration
pub fn seed_statuses() -> Vec<StatusRow> {
    [
        (1, "Pending"),
        (2, "In Review"),
        (3, "Approved"),
        (4, "Rejected"),
    ]
    .into_iter()
    .map(|(id, name)| StatusRow {
        id,
        name: name.to_string(),
    })
    .collect()
}

// ============================================
// Forms
// ============================================

/// A form joined with its status name
#[derive(Debug, Clone, FromRow)]
pub struct FormRow {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub number: String,
    pub evaluation: String,
    pub status_id: i64,
    pub status_name: String,
    pub provider_id: i64,
    pub category_id: i64,
    pub appraiser_id: i64,
}

impl From<FormRow> for Form {
    fn from(row: FormRow) -> Self {
        Form {
            id: row.id,
            date: row.date,
            number: row.number,
            evaluation: row.evaluation,
            status: Status {
                id: row.status_id,
                name: row.status_name,
            },
            provider_id: row.provider_id,
            category_id: row.category_id,
            appraiser_id: row.appraiser_id,
        }
    }
}

/// Column values written on insert and on full update
#[derive(Debug, Clone)]
pub struct UpsertFormRow {
    pub date: DateTime<Utc>,
    pub number: String,
    pub evaluation: String,
    pub status_id: i64,
    pub provider_id: i64,
    pub category_id: i64,
    pub appraiser_id: i64,
}

impl From<&FormDraft> for UpsertFormRow {
    fn from(draft: &FormDraft) -> Self {
        Self {
            date: draft.date,
            number: draft.number.clone(),
            evaluation: draft.evaluation.clone(),
            status_id: draft.status.id,
            provider_id: draft.provider_id,
            category_id: draft.category_id,
            appraiser_id: draft.appraiser_id,
        }
    }
}

impl From<&Form> for UpsertFormRow {
    fn from(form: &Form) -> Self {
        Self {
            date: form.date,
            number: form.number.clone(),
            evaluation: form.evaluation.clone(),
            status_id: form.status.id,
            provider_id: form.provider_id,
            category_id: form.category_id,
            appraiser_id: form.appraiser_id,
        }
    }
}
