use crate::media::{validate_video_field, FieldValue, MediaLimits};
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Name of the polymorphic video field, used in its messages.
pub const VIDEO_ATTRIBUTE: &str = "video";

/// Video link submitted as multipart form data. `video` is either a URL string or a
/// direct upload.
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateVideoLinkRequest {
    #[validate(
        required(message = "The title field is required."),
        length(min = 1, max = 255, message = "Title must be between 1 and 255 characters")
    )]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub video: FieldValue,
}

impl CreateVideoLinkRequest {
    /// Run the declarative rules and the video check, collecting every failure.
    pub fn validate_with(&self, limits: &MediaLimits) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Err(err) = validate_video_field(VIDEO_ATTRIBUTE, &self.video, limits) {
            tracing::debug!(error = %err, "Video field rejected");
            errors.add(VIDEO_ATTRIBUTE, err.into_validation_error());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Where an accepted video comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoSource {
    None,
    Url {
        url: String,
    },
    Upload {
        file_name: String,
        mime_type: String,
        size_bytes: u64,
    },
}

/// Accepted video link
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VideoLinkResponse {
    pub title: String,
    pub description: Option<String>,
    pub video: VideoSource,
}

impl VideoLinkResponse {
    /// Build the response for a request that passed [`CreateVideoLinkRequest::validate_with`].
    pub fn from_request(request: CreateVideoLinkRequest) -> Self {
        let video = match request.video {
            FieldValue::Text(url) if !url.is_empty() => VideoSource::Url { url },
            FieldValue::Upload(file) => VideoSource::Upload {
                file_name: file.original_name,
                mime_type: file.mime_type,
                size_bytes: file.size_bytes,
            },
            _ => VideoSource::None,
        };
        Self {
            title: request.title.unwrap_or_default(),
            description: request.description,
            video,
        }
    }
}
