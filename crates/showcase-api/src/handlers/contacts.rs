use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::Respond;
use axum::response::Response;
use showcase_core::forms::StoreContactRequest;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    tag = "contacts",
    request_body = StoreContactRequest,
    responses(
        (status = 201, description = "Contact message accepted", body = StoreContactRequest),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn store_contact(
    ValidatedJson(request): ValidatedJson<StoreContactRequest>,
) -> Result<Response, HttpAppError> {
    request.validate()?;

    tracing::info!(email = %request.email, "Contact message accepted");
    Ok(request.respond_created("Contact message sent successfully"))
}
