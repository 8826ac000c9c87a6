use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::Respond;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use showcase_core::forms::{HomepageSectionResponse, StoreHomepageSectionRequest};
use std::sync::Arc;
use validator::Validate;

/// Accept a homepage section. The image path is echoed back as a public URL.
#[utoipa::path(
    post,
    path = "/api/v1/homepage-sections",
    tag = "homepage-sections",
    request_body = StoreHomepageSectionRequest,
    responses(
        (status = 201, description = "Homepage section accepted", body = HomepageSectionResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn store_homepage_section(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<StoreHomepageSectionRequest>,
) -> Result<Response, HttpAppError> {
    request.validate()?;

    let response = HomepageSectionResponse::from_request(request, state.config.app_url());
    tracing::info!(section = ?response.section, "Homepage section accepted");
    Ok(response.respond_created("Homepage section created successfully"))
}
