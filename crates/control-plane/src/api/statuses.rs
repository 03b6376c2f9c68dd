// Form status reference table HTTP routes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use evaluations_core::{FormStore, Status};
use std::sync::Arc;

use super::common::{error_response, ErrorResponse, ListResponse};
use crate::services::StatusService;

/// App state for status routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StatusService>,
}

impl AppState {
    pub fn new(store: Arc<dyn FormStore>) -> Self {
        Self {
            service: Arc::new(StatusService::new(store)),
        }
    }
}

/// Create status routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/form-statuses", get(list_statuses))
        .with_state(state)
}

/// GET /v1/form-statuses - List the form status reference table
#[utoipa::path(
    get,
    path = "/v1/form-statuses",
    responses(
        (status = 200, description = "List of form statuses", body = ListResponse<Status>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "form-statuses"
)]
pub async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Status>>, (StatusCode, Json<ErrorResponse>)> {
    let statuses = state.service.list().await.map_err(error_response)?;

    Ok(Json(ListResponse::new(statuses)))
}
