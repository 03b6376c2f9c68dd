// Wire shapes for the form API
//
// FormRequest is accepted on create and update. FormView is the outward
// projection of a form plus whatever peer records were resolved for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::peer::PeerKind;

/// Request to create or fully replace a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FormRequest {
    /// Evaluation date. Defaults to the current time when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Form number
    #[cfg_attr(feature = "openapi", schema(example = "A-100"))]
    pub number: String,
    /// Free-text evaluation body
    #[cfg_attr(feature = "openapi", schema(example = "ok"))]
    pub evaluation: String,
    /// Status id; must exist in the status table
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub status_id: i64,
    /// Provider id, owned by the provider service
    #[cfg_attr(feature = "openapi", schema(example = 10))]
    pub provider_id: i64,
    /// Category id, owned by the category service
    #[cfg_attr(feature = "openapi", schema(example = 20))]
    pub category_id: i64,
    /// Appraiser id, owned by the appraiser service
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub appraiser_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct StatusView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProviderView {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CategoryView {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AppraiserView {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A form as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub number: String,
    pub evaluation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appraiser: Option<AppraiserView>,
    /// Peers that could not be reached while building this view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub unavailable_peers: Vec<PeerKind>,
}
