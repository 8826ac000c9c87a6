use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::Respond;
use axum::response::Response;
use showcase_core::forms::StoreFooterContactRequest;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/v1/footer-contacts",
    tag = "footer-contacts",
    request_body = StoreFooterContactRequest,
    responses(
        (status = 201, description = "Footer contact accepted", body = StoreFooterContactRequest),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn store_footer_contact(
    ValidatedJson(request): ValidatedJson<StoreFooterContactRequest>,
) -> Result<Response, HttpAppError> {
    request.validate()?;

    tracing::info!(kind = ?request.kind, label = %request.label, "Footer contact accepted");
    Ok(request.respond_created("Footer contact created successfully"))
}
