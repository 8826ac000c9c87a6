//! Multipart form parsing
//!
//! Each part of a multipart body is classified into a [`FieldValue`]. File parts are
//! spooled to a temp file chunk by chunk so the per-file limit applies before the whole
//! part is buffered; transfer problems are recorded on the [`UploadedFile`] instead of
//! failing the request, so the form validator can report them next to other fields.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use showcase_core::{AppError, Config, FieldValue, UploadErrorCode, UploadedFile};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};
use tokio::io::AsyncWriteExt;

/// Name of the hidden form field that caps the size of the file parts following it.
pub const FORM_SIZE_LIMIT_FIELD: &str = "MAX_FILE_SIZE";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Server-side rules for receiving file parts.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_bytes: u64,
    pub tmp_dir: PathBuf,
    pub blocked_extensions: Vec<String>,
}

impl UploadPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_bytes: config.upload_max_filesize_bytes(),
            tmp_dir: config.upload_tmp_dir(),
            blocked_extensions: config.blocked_upload_extensions().to_vec(),
        }
    }

    fn is_blocked(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .is_some_and(|ext| self.blocked_extensions.contains(&ext))
    }
}

/// A spooled file part.
#[derive(Debug)]
pub struct SpooledFile {
    pub file: UploadedFile,
    /// Removed from disk when dropped
    pub path: TempPath,
}

/// Classified fields of one request. Spooled files are deleted when this is dropped.
#[derive(Debug, Default)]
pub struct ParsedForm {
    fields: HashMap<String, FieldValue>,
    spooled: HashMap<String, TempPath>,
}

impl ParsedForm {
    /// Remove and return a field; missing fields are `Absent`.
    pub fn take(&mut self, name: &str) -> FieldValue {
        self.fields.remove(name).unwrap_or_default()
    }

    /// Remove and return a text field; any other shape yields `None`.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        match self.take(name) {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Path of the spooled content of a successfully received file field.
    pub fn spooled_path(&self, name: &str) -> Option<&Path> {
        self.spooled.get(name).map(|p| &**p)
    }

    fn insert(&mut self, name: String, value: FieldValue) {
        self.spooled.remove(&name);
        self.fields.insert(name, value);
    }

    fn insert_spooled(&mut self, name: String, spooled: SpooledFile) {
        self.fields
            .insert(name.clone(), FieldValue::Upload(spooled.file));
        self.spooled.insert(name, spooled.path);
    }
}

/// Outcome of receiving one file part.
enum Received {
    Spooled(SpooledFile),
    Failed(UploadedFile),
    /// An untouched file input: empty filename and no content.
    Nothing,
}

/// Read every part of `multipart` into a [`ParsedForm`].
///
/// Only failures of the multipart framing itself are returned as errors; a broken file
/// transfer ends parsing and is recorded on that field.
pub async fn parse_multipart(
    mut multipart: Multipart,
    policy: &UploadPolicy,
) -> Result<ParsedForm, AppError> {
    let mut form = ParsedForm::default();
    let mut form_size_limit: Option<u64> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            let value = read_text_field(field).await?;
            if name == FORM_SIZE_LIMIT_FIELD {
                if let FieldValue::Text(ref limit) = value {
                    form_size_limit = limit.trim().parse().ok();
                }
            }
            form.insert(name, value);
            continue;
        };

        let (received, transfer_broken) =
            receive_file(field, filename, policy, form_size_limit).await;
        match received {
            Received::Spooled(spooled) => form.insert_spooled(name, spooled),
            Received::Failed(file) => {
                tracing::debug!(
                    field = %name,
                    filename = %file.original_name,
                    error = ?file.error,
                    "File part not received"
                );
                form.insert(name, FieldValue::Upload(file));
            }
            Received::Nothing => form.insert(name, FieldValue::Absent),
        }

        if transfer_broken {
            break;
        }
    }

    Ok(form)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Request body too large: {}", e.body_text()))
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", e.body_text()))
    }
}

async fn read_text_field(field: Field<'_>) -> Result<FieldValue, AppError> {
    let bytes = field.bytes().await.map_err(multipart_error)?;
    Ok(match String::from_utf8(bytes.to_vec()) {
        Ok(text) => FieldValue::Text(text),
        Err(_) => FieldValue::Malformed,
    })
}

fn transfer_error_code(status: StatusCode) -> UploadErrorCode {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => UploadErrorCode::SizeExceedsServerLimit,
        StatusCode::BAD_REQUEST => UploadErrorCode::PartialTransfer,
        _ => UploadErrorCode::Unknown,
    }
}

/// A file part without a filename is an untouched file input only when it carries no
/// content; anything else is reported as no file, without being stored.
async fn receive_unnamed(mut field: Field<'_>) -> (Received, bool) {
    loop {
        match field.chunk().await {
            Ok(Some(chunk)) if chunk.is_empty() => continue,
            Ok(Some(_)) => {
                return (
                    Received::Failed(UploadedFile::failed("", UploadErrorCode::NoFile)),
                    false,
                );
            }
            Ok(None) => return (Received::Nothing, false),
            Err(e) => {
                tracing::debug!(error = %e, "Upload stream interrupted");
                let code = transfer_error_code(e.status());
                return (Received::Failed(UploadedFile::failed("", code)), true);
            }
        }
    }
}

/// Receive one file part. The flag is set when the body stream itself broke and no
/// further parts can be read.
async fn receive_file(
    mut field: Field<'_>,
    filename: String,
    policy: &UploadPolicy,
    form_size_limit: Option<u64>,
) -> (Received, bool) {
    if filename.is_empty() {
        return receive_unnamed(field).await;
    }

    if policy.is_blocked(&filename) {
        return (
            Received::Failed(UploadedFile::failed(filename, UploadErrorCode::ExtensionBlocked)),
            false,
        );
    }

    let content_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    let temp = match NamedTempFile::new_in(&policy.tmp_dir) {
        Ok(temp) => temp,
        Err(e) => {
            tracing::error!(
                error = %e,
                tmp_dir = %policy.tmp_dir.display(),
                "Cannot create temp file for upload"
            );
            return (
                Received::Failed(UploadedFile::failed(filename, UploadErrorCode::MissingTempStorage)),
                false,
            );
        }
    };
    let (std_file, path) = temp.into_parts();
    let mut file = tokio::fs::File::from_std(std_file);

    let mut size: u64 = 0;
    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, filename = %filename, "Upload stream interrupted");
                let code = transfer_error_code(e.status());
                return (Received::Failed(UploadedFile::failed(filename, code)), true);
            }
        };

        size += chunk.len() as u64;
        if size > policy.max_file_bytes {
            return (
                Received::Failed(UploadedFile::failed(
                    filename,
                    UploadErrorCode::SizeExceedsServerLimit,
                )),
                false,
            );
        }
        if form_size_limit.is_some_and(|limit| size > limit) {
            return (
                Received::Failed(UploadedFile::failed(
                    filename,
                    UploadErrorCode::SizeExceedsFormLimit,
                )),
                false,
            );
        }

        if let Err(e) = file.write_all(&chunk).await {
            tracing::error!(error = %e, path = %path.display(), "Failed to write upload chunk");
            return (
                Received::Failed(UploadedFile::failed(filename, UploadErrorCode::WriteFailure)),
                false,
            );
        }
    }

    if let Err(e) = file.flush().await {
        tracing::error!(error = %e, path = %path.display(), "Failed to flush upload");
        return (
            Received::Failed(UploadedFile::failed(filename, UploadErrorCode::WriteFailure)),
            false,
        );
    }

    if size == 0 {
        return (
            Received::Failed(UploadedFile::failed(filename, UploadErrorCode::NoFile)),
            false,
        );
    }

    (
        Received::Spooled(SpooledFile {
            file: UploadedFile::received(filename, content_type, size),
            path,
        }),
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UploadPolicy {
        UploadPolicy {
            max_file_bytes: 1024,
            tmp_dir: std::env::temp_dir(),
            blocked_extensions: vec!["php".to_string(), "exe".to_string()],
        }
    }

    #[test]
    fn test_blocked_extension_is_case_insensitive() {
        let policy = policy();
        assert!(policy.is_blocked("shell.php"));
        assert!(policy.is_blocked("SETUP.EXE"));
        assert!(!policy.is_blocked("clip.mp4"));
        assert!(!policy.is_blocked("php"));
    }

    #[test]
    fn test_stream_error_status_maps_to_upload_code() {
        assert_eq!(
            transfer_error_code(StatusCode::PAYLOAD_TOO_LARGE),
            UploadErrorCode::SizeExceedsServerLimit
        );
        assert_eq!(
            transfer_error_code(StatusCode::BAD_REQUEST),
            UploadErrorCode::PartialTransfer
        );
        assert_eq!(
            transfer_error_code(StatusCode::INTERNAL_SERVER_ERROR),
            UploadErrorCode::Unknown
        );
    }

    #[test]
    fn test_parsed_form_take_defaults_to_absent() {
        let mut form = ParsedForm::default();
        form.insert("title".to_string(), FieldValue::Text("Hi".to_string()));
        assert_eq!(form.take_text("title").as_deref(), Some("Hi"));
        assert!(form.take("title").is_absent());
        assert!(form.take("video").is_absent());
    }

    #[test]
    fn test_replacing_a_field_forgets_its_spooled_file() {
        let mut form = ParsedForm::default();
        let temp = NamedTempFile::new().expect("temp file");
        let path = temp.into_temp_path();
        let on_disk = path.to_path_buf();
        form.insert_spooled(
            "video".to_string(),
            SpooledFile {
                file: UploadedFile::received("a.mp4", "video/mp4", 3),
                path,
            },
        );
        assert_eq!(form.spooled_path("video"), Some(on_disk.as_path()));

        form.insert("video".to_string(), FieldValue::Text("https://x.test".to_string()));
        assert!(form.spooled_path("video").is_none());
        assert!(!on_disk.exists());
    }
}
