//! JSON envelope helpers
//!
//! Successful responses share one shape: `{ "success": true, "message": ..., "data": ... }`.
//! Errors use [`crate::error::ErrorResponse`], which carries `success: false`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Wrap any serializable value in the success envelope.
pub trait Respond: Serialize + Sized {
    fn respond(self, status: StatusCode, message: impl Into<String>) -> Response {
        (status, Json(ApiEnvelope::success(message, self))).into_response()
    }

    fn respond_ok(self, message: impl Into<String>) -> Response {
        self.respond(StatusCode::OK, message)
    }

    fn respond_created(self, message: impl Into<String>) -> Response {
        self.respond(StatusCode::CREATED, message)
    }
}

impl<T: Serialize> Respond for T {}
