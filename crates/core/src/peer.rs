// Peer record types
//
// Records owned by the provider, category and appraiser services. They are
// deserialized from peer responses as-is; the upstream services emit Spanish
// field names, accepted here as aliases. Every field is optional on the wire,
// `id` included; a record without one decodes with id 0.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider record owned by the provider service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub id: i64,
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "direccion")]
    pub address: Option<String>,
}

/// Category record owned by the category service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
}

/// Appraiser record owned by the appraiser service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appraiser {
    #[serde(default)]
    pub id: i64,
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "direccion")]
    pub address: Option<String>,
}

/// The kind of peer record a form references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerKind {
    Provider,
    Category,
    Appraiser,
}

impl PeerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeerKind::Provider => "provider",
            PeerKind::Category => "category",
            PeerKind::Appraiser => "appraiser",
        }
    }
}

impl fmt::Display for PeerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of fetching one peer record during enrichment
#[derive(Debug, Clone, PartialEq)]
pub enum PeerLookup<T> {
    /// The peer returned the record
    Resolved(T),
    /// The peer answered successfully with an empty body
    Missing,
    /// The peer call failed and the failure was tolerated
    Unavailable,
}

impl<T> PeerLookup<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            PeerLookup::Resolved(record) => Some(record),
            PeerLookup::Missing | PeerLookup::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, PeerLookup::Unavailable)
    }
}

impl<T> From<Option<T>> for PeerLookup<T> {
    fn from(record: Option<T>) -> Self {
        match record {
            Some(record) => PeerLookup::Resolved(record),
            None => PeerLookup::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_accepts_upstream_field_names() {
        let provider: Provider = serde_json::from_str(
            r#"{"id": 10, "nombre": "Acme", "telefono": "555-0100", "direccion": "Main St 1"}"#,
        )
        .unwrap();

        assert_eq!(provider.id, 10);
        assert_eq!(provider.name.as_deref(), Some("Acme"));
        assert_eq!(provider.phone.as_deref(), Some("555-0100"));
        assert_eq!(provider.address.as_deref(), Some("Main St 1"));
    }

    #[test]
    fn test_category_tolerates_missing_description() {
        let category: Category = serde_json::from_str(r#"{"id": 20}"#).unwrap();
        assert_eq!(category.description, None);

        let category: Category =
            serde_json::from_str(r#"{"id": 20, "description": "Roofing"}"#).unwrap();
        assert_eq!(category.description.as_deref(), Some("Roofing"));
    }

    #[test]
    fn test_record_without_id_still_decodes() {
        let appraiser: Appraiser = serde_json::from_str(r#"{"nombre": "Jane"}"#).unwrap();
        assert_eq!(appraiser.id, 0);
        assert_eq!(appraiser.name.as_deref(), Some("Jane"));

        let category: Category = serde_json::from_str(r#"{"descripcion": "Roofing"}"#).unwrap();
        assert_eq!(category.id, 0);
        assert_eq!(category.description.as_deref(), Some("Roofing"));
    }

    #[test]
    fn test_peer_lookup_from_option() {
        let lookup: PeerLookup<i64> = Some(3).into();
        assert_eq!(lookup.resolved(), Some(&3));

        let lookup: PeerLookup<i64> = None.into();
        assert_eq!(lookup, PeerLookup::Missing);
        assert!(!lookup.is_unavailable());
    }
}
