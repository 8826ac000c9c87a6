//! Polymorphic media input validation
//!
//! A video field may arrive either as a URL string or as a direct binary upload. The
//! request layer classifies the raw field into a [`FieldValue`]; [`validate_video_field`]
//! then applies the constraints for that shape and yields at most one failure message.

use serde::Serialize;
use std::borrow::Cow;

/// Longest accepted URL string, in characters.
pub const MAX_VIDEO_URL_CHARS: usize = 1000;

/// Largest accepted video upload (100 MiB).
pub const MAX_VIDEO_UPLOAD_BYTES: u64 = 104_857_600;

/// Literal, case-sensitive MIME prefix a video upload must carry.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// Transport-level failure recorded while the server received an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadErrorCode {
    SizeExceedsServerLimit,
    SizeExceedsFormLimit,
    PartialTransfer,
    NoFile,
    MissingTempStorage,
    WriteFailure,
    ExtensionBlocked,
    Unknown,
}

impl UploadErrorCode {
    /// Fixed message for this code. `Unknown` has none and falls back to the
    /// attribute-specific "failed to upload" message.
    pub fn message(self, server_limit: &str) -> Option<Cow<'static, str>> {
        let message = match self {
            UploadErrorCode::SizeExceedsServerLimit => Cow::Owned(format!(
                "The file exceeds the upload_max_filesize directive in php.ini (currently {}). \
                 Please increase upload_max_filesize and post_max_size in php.ini to at least 100MB for videos.",
                server_limit
            )),
            UploadErrorCode::SizeExceedsFormLimit => Cow::Borrowed(
                "The file exceeds the MAX_FILE_SIZE directive that was specified in the HTML form.",
            ),
            UploadErrorCode::PartialTransfer => {
                Cow::Borrowed("The file was only partially uploaded.")
            }
            UploadErrorCode::NoFile => Cow::Borrowed("No file was uploaded."),
            UploadErrorCode::MissingTempStorage => Cow::Borrowed("Missing a temporary folder."),
            UploadErrorCode::WriteFailure => Cow::Borrowed("Failed to write file to disk."),
            UploadErrorCode::ExtensionBlocked => {
                Cow::Borrowed("A PHP extension stopped the file upload.")
            }
            UploadErrorCode::Unknown => return None,
        };
        Some(message)
    }
}

/// Metadata of a received upload. `mime_type` and `size_bytes` are only meaningful
/// when [`UploadedFile::is_valid`] holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub error: Option<UploadErrorCode>,
}

impl UploadedFile {
    /// A completed transfer.
    pub fn received(
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            error: None,
        }
    }

    /// A transfer that failed with `code`.
    pub fn failed(original_name: impl Into<String>, code: UploadErrorCode) -> Self {
        Self {
            original_name: original_name.into(),
            mime_type: String::new(),
            size_bytes: 0,
            error: Some(code),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// One named request field, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Absent,
    Text(String),
    Upload(UploadedFile),
    /// Present, but neither readable text nor a file part (e.g. a non-UTF-8 text part).
    Malformed,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// Limits applied by [`validate_video_field`]. The length and size limits are fixed;
/// only the quoted server limit comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLimits {
    max_text_chars: usize,
    max_upload_bytes: u64,
    /// Server upload limit as configured (e.g. `100M`), quoted in the
    /// size-exceeds-server-limit message.
    pub server_limit_label: String,
}

impl MediaLimits {
    pub fn new(server_limit_label: impl Into<String>) -> Self {
        Self {
            max_text_chars: MAX_VIDEO_URL_CHARS,
            max_upload_bytes: MAX_VIDEO_UPLOAD_BYTES,
            server_limit_label: server_limit_label.into(),
        }
    }

    pub fn max_text_chars(&self) -> usize {
        self.max_text_chars
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    fn max_upload_mb(&self) -> u64 {
        self.max_upload_bytes / 1024 / 1024
    }
}

impl Default for MediaLimits {
    fn default() -> Self {
        Self::new("100M")
    }
}

/// Rejection of a video field. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaFieldError {
    #[error("The {attribute} URL must not exceed {max_chars} characters.")]
    UrlTooLong { attribute: String, max_chars: usize },

    #[error("{}", transport_message(.code, .attribute, .server_limit))]
    Transport {
        attribute: String,
        code: UploadErrorCode,
        server_limit: String,
    },

    #[error("The {attribute} must be a valid video file (max {max_mb}MB) or a string URL.")]
    NotAVideo { attribute: String, max_mb: u64 },

    #[error("The {attribute} must not be larger than {max_mb}MB.")]
    TooLarge { attribute: String, max_mb: u64 },
}

fn transport_message(code: &UploadErrorCode, attribute: &str, server_limit: &str) -> String {
    match code.message(server_limit) {
        Some(message) => message.into_owned(),
        None => format!(
            "The {} failed to upload. Please check your file and try again.",
            attribute
        ),
    }
}

/// Outcome of validating one field: `Ok(())` is acceptance.
pub type ValidationOutcome = Result<(), MediaFieldError>;

/// Validate a video field that may be a URL string or an uploaded file.
///
/// Transport failures are reported before any content check, since a failed transfer
/// carries no trustworthy MIME type or size.
pub fn validate_video_field(
    attribute: &str,
    field: &FieldValue,
    limits: &MediaLimits,
) -> ValidationOutcome {
    match field {
        FieldValue::Absent => Ok(()),
        FieldValue::Text(url) => {
            if url.chars().count() > limits.max_text_chars {
                return Err(MediaFieldError::UrlTooLong {
                    attribute: attribute.to_string(),
                    max_chars: limits.max_text_chars,
                });
            }
            Ok(())
        }
        FieldValue::Upload(file) => {
            if let Some(code) = file.error {
                return Err(MediaFieldError::Transport {
                    attribute: attribute.to_string(),
                    code,
                    server_limit: limits.server_limit_label.clone(),
                });
            }
            if !file.mime_type.starts_with(VIDEO_MIME_PREFIX) {
                return Err(MediaFieldError::NotAVideo {
                    attribute: attribute.to_string(),
                    max_mb: limits.max_upload_mb(),
                });
            }
            if file.size_bytes > limits.max_upload_bytes {
                return Err(MediaFieldError::TooLarge {
                    attribute: attribute.to_string(),
                    max_mb: limits.max_upload_mb(),
                });
            }
            Ok(())
        }
        FieldValue::Malformed => Err(MediaFieldError::NotAVideo {
            attribute: attribute.to_string(),
            max_mb: limits.max_upload_mb(),
        }),
    }
}

impl MediaFieldError {
    /// Convert into a `validator` error so it can be collected next to declarative rules.
    pub fn into_validation_error(self) -> validator::ValidationError {
        let code = match self {
            MediaFieldError::UrlTooLong { .. } => "video_url_length",
            MediaFieldError::Transport { .. } => "video_upload",
            MediaFieldError::NotAVideo { .. } => "video_type",
            MediaFieldError::TooLarge { .. } => "video_size",
        };
        let mut error = validator::ValidationError::new(code);
        error.message = Some(Cow::Owned(self.to_string()));
        error
    }
}
