//! Common types used across the widget.
//!
//! # Categories
//!
//! - **File Types** - what the user picked and how it is inspected
//! - **Upload State** - idle vs. transfer in flight
//! - **Error Types** - the closed set of outcomes shown to the user

use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Anything the validator can inspect.
///
/// Implemented for [`web_sys::File`]; tests use plain structs.
pub trait CandidateFile {
    /// Original file name.
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// Declared media type, e.g. `text/csv`.
    fn media_type(&self) -> String;
}

impl CandidateFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn media_type(&self) -> String {
        web_sys::Blob::type_(self)
    }
}

/// A file that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F = web_sys::File> {
    /// File name shown in the UI
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared media type
    pub media_type: String,
    /// Handle sent in the multipart body
    pub handle: F,
}

impl<F: CandidateFile> SelectedFile<F> {
    /// Snapshot the metadata of `handle`.
    pub fn new(handle: F) -> Self {
        Self {
            name: handle.name(),
            size: handle.size(),
            media_type: handle.media_type(),
            handle,
        }
    }
}

// =============================================================================
// Upload State
// =============================================================================

/// Whether a transfer is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
}

impl UploadState {
    pub fn is_uploading(self) -> bool {
        matches!(self, UploadState::Uploading)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Every way a selection or a transfer can fail.
///
/// `Display` is the message shown to the user. `reason` fields carry the
/// underlying detail for the console only.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Declared media type is not CSV.
    #[error("Please upload a CSV file")]
    InvalidType,

    /// File is above the size limit.
    #[error("File size exceeds {max_mb}MB limit")]
    TooLarge { max_mb: u64 },

    /// Server answered with a non-2xx status.
    #[error("{message}")]
    ServerRejected { status: u16, message: String },

    /// Request went out but no response came back.
    #[error("No response received from the server. Please try again.")]
    NoResponse { reason: String },

    /// Request could not be built or issued.
    #[error("An error occurred while uploading the file. Please try again.")]
    RequestSetupFailed { reason: String },

    /// Response arrived but could not be saved locally.
    #[error("Failed to save the downloaded file. Please try again.")]
    SaveFailed { reason: String },
}

impl UploadError {
    /// Internal detail worth logging, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            UploadError::InvalidType | UploadError::TooLarge { .. } => None,
            UploadError::ServerRejected { status, .. } => Some(format!("HTTP {}", status)),
            UploadError::NoResponse { reason }
            | UploadError::RequestSetupFailed { reason }
            | UploadError::SaveFailed { reason } => Some(reason.clone()),
        }
    }
}

/// Result type alias for widget operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Best-effort text for a failed browser call.
pub(crate) fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(UploadError::InvalidType.to_string(), "Please upload a CSV file");
        assert_eq!(
            UploadError::TooLarge { max_mb: 5 }.to_string(),
            "File size exceeds 5MB limit"
        );
        assert_eq!(
            UploadError::ServerRejected { status: 422, message: "bad rows".into() }.to_string(),
            "bad rows"
        );
        assert_eq!(
            UploadError::NoResponse { reason: "timeout".into() }.to_string(),
            "No response received from the server. Please try again."
        );
        assert_eq!(
            UploadError::RequestSetupFailed { reason: "FormData".into() }.to_string(),
            "An error occurred while uploading the file. Please try again."
        );
    }

    #[test]
    fn detail_is_never_in_the_message() {
        let err = UploadError::NoResponse { reason: "TypeError: Failed to fetch".into() };
        assert!(!err.to_string().contains("TypeError"));
        assert_eq!(err.detail().as_deref(), Some("TypeError: Failed to fetch"));
        assert_eq!(UploadError::InvalidType.detail(), None);
    }

    #[test]
    fn upload_state_defaults_to_idle() {
        assert_eq!(UploadState::default(), UploadState::Idle);
        assert!(!UploadState::Idle.is_uploading());
        assert!(UploadState::Uploading.is_uploading());
    }
}
