use crate::error::with_error_details;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Whether error responses may carry `details` and `error_type`; off in production.
#[derive(Clone, Copy, Debug)]
pub struct ErrorDetailsConfig {
    pub expose: bool,
}

pub async fn error_details_middleware(
    State(config): State<ErrorDetailsConfig>,
    request: Request,
    next: Next,
) -> Response {
    with_error_details(config.expose, next.run(request)).await
}
