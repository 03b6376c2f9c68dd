// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the evaluation form API.
// It can be used by both the main API server (for Swagger UI)
// and the export-openapi binary (for static spec generation).

use crate::api;
use crate::api::{ErrorResponse, ListResponse};
use evaluations_core::{
    AppraiserView, CategoryView, FormRequest, FormView, ProviderView, Status, StatusView,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the evaluation form API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::forms::create_form,
        api::forms::list_forms,
        api::forms::get_form,
        api::forms::update_form,
        api::forms::delete_form,
        api::statuses::list_statuses,
    ),
    components(
        schemas(
            FormRequest, FormView,
            StatusView, ProviderView, CategoryView, AppraiserView,
            Status,
            ErrorResponse,
            ListResponse<FormView>,
            ListResponse<Status>,
        )
    ),
    tags(
        (name = "forms", description = "Evaluation form endpoints"),
        (name = "form-statuses", description = "Form status reference table")
    ),
    info(
        title = "Evaluations API",
        version = "0.1.0",
        description = "API for evaluation forms enriched with provider, category and appraiser records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
