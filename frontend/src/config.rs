//! Application configuration.
//!
//! Centralized configuration for the CSV upload widget. The upload endpoint
//! is never a fixed literal: it comes from the host page, the build
//! environment, or falls back to a local development server.

/// Application name, shown in the header, footer and page title.
pub const APP_NAME: &str = "Upload CSV";

/// Development fallback for the processing endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/";

/// Build-time override for the endpoint (`CSV_UPLOAD_ENDPOINT=... trunk build`).
pub const BUILD_ENDPOINT: Option<&str> = option_env!("CSV_UPLOAD_ENDPOINT");

/// `<meta name="...">` tag read at load to override the endpoint at runtime.
pub const ENDPOINT_META_NAME: &str = "csv-upload-endpoint";

/// Multipart field carrying the file.
pub const FILE_FIELD_NAME: &str = "file";

/// Canonical CSV MIME type.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Filter passed to the native file picker.
pub const CSV_ACCEPT_FILTER: &str = ".csv";

/// Maximum file size for upload (in bytes).
///
/// 5 MiB limit.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Abort the request if no response arrives within this delay.
pub const REQUEST_TIMEOUT_MS: u32 = 60_000;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Runtime configuration of a [`CsvUploadWidget`](crate::CsvUploadWidget).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// URL the file is POSTed to.
    pub endpoint: String,
    /// Multipart field name.
    pub field_name: String,
    /// Exact media type a file must declare.
    pub accepted_mime: String,
    /// `accept` attribute of the picker.
    pub accept_filter: String,
    /// Largest accepted file, inclusive.
    pub max_file_size: u64,
    /// `None` leaves the request to the browser's own timeout.
    pub request_timeout_ms: Option<u32>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: BUILD_ENDPOINT.unwrap_or(DEFAULT_ENDPOINT).to_string(),
            field_name: FILE_FIELD_NAME.to_string(),
            accepted_mime: CSV_MIME_TYPE.to_string(),
            accept_filter: CSV_ACCEPT_FILTER.to_string(),
            max_file_size: MAX_FILE_SIZE,
            request_timeout_ms: Some(REQUEST_TIMEOUT_MS),
        }
    }
}

impl UploadConfig {
    /// Default configuration, with the endpoint overridden by the host
    /// page's `<meta name="csv-upload-endpoint">` tag when present.
    pub fn from_document() -> Self {
        let config = Self::default();
        match endpoint_from_meta() {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        }
    }

    /// Replace the endpoint. Blank values are ignored.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
        self
    }

    /// Size limit rounded down to whole megabytes, for user-facing text.
    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size / BYTES_PER_MB
    }
}

fn endpoint_from_meta() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", ENDPOINT_META_NAME);
    gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
