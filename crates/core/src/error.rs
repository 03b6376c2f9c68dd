// Error types for form composition

use thiserror::Error;

use crate::peer::PeerKind;

/// Result type alias for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors that can occur while reading or writing forms
#[derive(Debug, Error)]
pub enum FormError {
    /// No form with this id in the record store
    #[error("Form not found: {0}")]
    FormNotFound(i64),

    /// Referenced status does not exist in the status table
    #[error("Status not found: {0}")]
    StatusNotFound(i64),

    /// A peer fetch failed during enrichment
    #[error("{peer} {id} unavailable: {reason}")]
    PeerUnavailable {
        peer: PeerKind,
        id: i64,
        reason: String,
    },

    /// Record store error, with the backend's full error chain
    #[error("Record store error: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl FormError {
    /// Create a peer unavailable error
    pub fn peer(peer: PeerKind, id: i64, reason: impl Into<String>) -> Self {
        FormError::PeerUnavailable {
            peer,
            id,
            reason: reason.into(),
        }
    }
}
