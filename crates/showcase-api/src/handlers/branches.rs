use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::Respond;
use axum::response::Response;
use showcase_core::forms::StoreBranchRequest;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/v1/branches",
    tag = "branches",
    request_body = StoreBranchRequest,
    responses(
        (status = 201, description = "Branch accepted", body = StoreBranchRequest),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn store_branch(
    ValidatedJson(request): ValidatedJson<StoreBranchRequest>,
) -> Result<Response, HttpAppError> {
    request.validate()?;

    tracing::info!(name = %request.name, status = ?request.status, "Branch accepted");
    Ok(request.respond_created("Branch created successfully"))
}
