use crate::error::{ErrorResponse, HttpAppError};
use crate::response::Respond;
use crate::state::AppState;
use crate::utils::upload::parse_multipart;
use axum::{
    extract::{Multipart, State},
    response::Response,
};
use showcase_core::forms::{CreateVideoLinkRequest, VideoLinkResponse, VIDEO_ATTRIBUTE};
use std::sync::Arc;

/// Empty text submits the same as an omitted field.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[utoipa::path(
    post,
    path = "/api/v1/video-links",
    tag = "video-links",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Video link accepted", body = VideoLinkResponse),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_video_link(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let mut form = parse_multipart(multipart, &state.upload_policy).await?;

    let request = CreateVideoLinkRequest {
        title: non_empty(form.take_text("title")),
        description: non_empty(form.take_text("description")),
        video: form.take(VIDEO_ATTRIBUTE),
    };

    request.validate_with(&state.media_limits)?;

    if let Some(path) = form.spooled_path(VIDEO_ATTRIBUTE) {
        tracing::debug!(path = %path.display(), "Video upload accepted");
    }

    let response = VideoLinkResponse::from_request(request);
    tracing::info!(title = %response.title, video = ?response.video, "Video link accepted");

    Ok(response.respond_created("Video link created successfully"))
}
