//! Showcase Core Library
//!
//! Domain types, form requests, the media field validator, error types and configuration
//! shared by the Showcase API.

pub mod config;
pub mod error;
pub mod forms;
pub mod media;
pub mod media_url;

// Re-export commonly used types
pub use config::{BaseConfig, Config, LogFormat, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use media::{
    validate_video_field, FieldValue, MediaFieldError, MediaLimits, UploadErrorCode,
    UploadedFile, ValidationOutcome,
};
pub use media_url::normalize_image_url;
