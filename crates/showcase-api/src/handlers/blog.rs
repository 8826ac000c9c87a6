use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::response::Respond;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use showcase_core::forms::{BlogPostResponse, StoreBlogCategoryRequest, StoreBlogPostRequest};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/v1/blog/posts",
    tag = "blog",
    request_body = StoreBlogPostRequest,
    responses(
        (status = 201, description = "Blog post accepted", body = BlogPostResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn store_blog_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<StoreBlogPostRequest>,
) -> Result<Response, HttpAppError> {
    request.validate_with_slug()?;

    let response = BlogPostResponse::from_request(request, state.config.app_url());
    tracing::info!(slug = %response.slug, tags = response.tags.len(), "Blog post accepted");
    Ok(response.respond_created("Blog post created successfully"))
}

#[utoipa::path(
    post,
    path = "/api/v1/blog/categories",
    tag = "blog",
    request_body = StoreBlogCategoryRequest,
    responses(
        (status = 201, description = "Blog category accepted", body = StoreBlogCategoryRequest),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn store_blog_category(
    ValidatedJson(request): ValidatedJson<StoreBlogCategoryRequest>,
) -> Result<Response, HttpAppError> {
    request.validate()?;

    tracing::info!(name = %request.name, "Blog category accepted");
    Ok(request.respond_created("Blog category created successfully"))
}
