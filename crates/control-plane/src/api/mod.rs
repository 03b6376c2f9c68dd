// HTTP API routes
//
// This module contains all HTTP route handlers for the public API.
// Each submodule handles a specific resource type with its own AppState.

pub mod common;
pub mod forms;
pub mod statuses;
pub mod validation;

// Re-export common types
pub use common::{ErrorResponse, ListResponse};

use axum::Router;
use evaluations_core::{EnrichmentPolicy, FormStore, PeerDirectory};
use std::sync::Arc;

/// All resource routes, unprefixed
pub fn routes(
    store: Arc<dyn FormStore>,
    peers: Arc<dyn PeerDirectory>,
    policy: EnrichmentPolicy,
) -> Router {
    Router::new()
        .merge(forms::routes(forms::AppState::new(
            store.clone(),
            peers,
            policy,
        )))
        .merge(statuses::routes(statuses::AppState::new(store)))
}
