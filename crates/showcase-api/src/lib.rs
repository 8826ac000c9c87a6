//! Showcase API Library
//!
//! HTTP handlers, middleware, multipart parsing and application setup.

mod api_doc;
pub mod constants;
pub mod error;
mod handlers;
pub mod middleware;
pub mod response;
pub mod setup;
pub mod state;
mod telemetry;
pub mod utils;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
