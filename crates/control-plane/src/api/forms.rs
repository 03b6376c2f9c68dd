// Evaluation form CRUD HTTP routes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use evaluations_core::{EnrichmentPolicy, FormRequest, FormStore, FormView, PeerDirectory};
use std::sync::Arc;

use super::common::{error_response, rejection_response, ErrorResponse, ListResponse};
use super::validation::validate_form_request;
use crate::services::FormService;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// App state for form routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FormService>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn FormStore>,
        peers: Arc<dyn PeerDirectory>,
        policy: EnrichmentPolicy,
    ) -> Self {
        Self {
            service: Arc::new(FormService::new(store, peers, policy)),
        }
    }
}

/// Create form routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/forms", get(list_forms).post(create_form))
        .route(
            "/v1/forms/:form_id",
            get(get_form).put(update_form).delete(delete_form),
        )
        .with_state(state)
}

/// POST /v1/forms - Create a new evaluation form
#[utoipa::path(
    post,
    path = "/v1/forms",
    request_body = FormRequest,
    responses(
        (status = 201, description = "Form created", body = FormView),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 422, description = "Status not found", body = ErrorResponse),
        (status = 502, description = "Peer service unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn create_form(
    State(state): State<AppState>,
    payload: Result<Json<FormRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FormView>), ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    validate_form_request(&req)?;

    let view = state.service.create(req).await.map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /v1/forms - List all forms with their peer records
#[utoipa::path(
    get,
    path = "/v1/forms",
    responses(
        (status = 200, description = "List of forms", body = ListResponse<FormView>),
        (status = 502, description = "Peer service unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn list_forms(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<FormView>>, ApiError> {
    let forms = state.service.list().await.map_err(error_response)?;

    Ok(Json(ListResponse::new(forms)))
}

/// GET /v1/forms/{form_id} - Get form by ID
#[utoipa::path(
    get,
    path = "/v1/forms/{form_id}",
    params(
        ("form_id" = i64, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Form found", body = FormView),
        (status = 404, description = "Form not found", body = ErrorResponse),
        (status = 502, description = "Peer service unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn get_form(
    State(state): State<AppState>,
    Path(form_id): Path<i64>,
) -> Result<Json<FormView>, ApiError> {
    let view = state.service.get(form_id).await.map_err(error_response)?;

    Ok(Json(view))
}

/// PUT /v1/forms/{form_id} - Replace every field of a form
#[utoipa::path(
    put,
    path = "/v1/forms/{form_id}",
    params(
        ("form_id" = i64, Path, description = "Form ID")
    ),
    request_body = FormRequest,
    responses(
        (status = 200, description = "Form updated", body = FormView),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Form not found", body = ErrorResponse),
        (status = 422, description = "Status not found", body = ErrorResponse),
        (status = 502, description = "Peer service unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn update_form(
    State(state): State<AppState>,
    Path(form_id): Path<i64>,
    payload: Result<Json<FormRequest>, JsonRejection>,
) -> Result<Json<FormView>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    validate_form_request(&req)?;

    let view = state
        .service
        .update(form_id, req)
        .await
        .map_err(error_response)?;

    Ok(Json(view))
}

/// DELETE /v1/forms/{form_id} - Delete form
#[utoipa::path(
    delete,
    path = "/v1/forms/{form_id}",
    params(
        ("form_id" = i64, Path, description = "Form ID")
    ),
    responses(
        (status = 204, description = "Form deleted, or did not exist"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(form_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(form_id).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
