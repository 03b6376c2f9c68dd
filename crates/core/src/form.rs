// Form domain types
//
// A Form is the locally owned evaluation record. Peer records (provider,
// category, appraiser) are referenced by id only and never stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Entry of the form status reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Status {
    /// Status identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Pending"))]
    pub name: String,
}

impl Status {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A form that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub date: DateTime<Utc>,
    pub number: String,
    pub evaluation: String,
    pub status: Status,
    pub provider_id: i64,
    pub category_id: i64,
    pub appraiser_id: i64,
}

impl FormDraft {
    /// Attach the identifier assigned by the store
    pub fn with_id(self, id: i64) -> Form {
        Form {
            id,
            date: self.date,
            number: self.number,
            evaluation: self.evaluation,
            status: self.status,
            provider_id: self.provider_id,
            category_id: self.category_id,
            appraiser_id: self.appraiser_id,
        }
    }
}

/// A persisted evaluation form
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub number: String,
    pub evaluation: String,
    /// Exactly one status is always attached
    pub status: Status,
    pub provider_id: i64,
    pub category_id: i64,
    pub appraiser_id: i64,
}
