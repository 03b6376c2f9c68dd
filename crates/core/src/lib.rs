// Evaluation Form Composition
//
// This crate provides the storage-agnostic core of the evaluation form service:
// locally persisted forms are composed with provider, category and appraiser
// records owned by peer services.
//
// Key design decisions:
// - Uses traits (FormStore, PeerDirectory) for pluggable backends
// - Enrichment fetches peers one after another; failure handling is a policy
// - Assembly between wire shapes and stored shapes lives in one place
// - Peer records are never cached or persisted, only referenced by id

// Domain entity types
pub mod form;
pub mod peer;
pub mod views;

pub mod assembler;
pub mod enrichment;
pub mod error;
pub mod peer_client;
pub mod traits;

// In-memory implementations for testing
pub mod memory;

// Re-exports for convenience
pub use assembler::FormAssembler;
pub use enrichment::{EnrichedForm, Enricher, EnrichmentPolicy};
pub use error::{FormError, Result};
pub use form::{Form, FormDraft, Status};
pub use peer::{Appraiser, Category, PeerKind, PeerLookup, Provider};
pub use peer_client::{HttpPeerDirectory, PeerDirectoryConfig};
pub use traits::{FormStore, PeerDirectory};
pub use views::{
    AppraiserView, CategoryView, FormRequest, FormView, ProviderView, StatusView,
};
