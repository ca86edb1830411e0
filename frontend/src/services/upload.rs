//! HTTP transfer of the selected CSV to the processing endpoint.

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use serde_json::Value;
use web_sys::{AbortController, File, FormData};

use crate::config::UploadConfig;
use crate::services::download::resolve_filename;
use crate::types::{js_error_message, UploadError, UploadResult};

/// Shown when the server rejected the file without a usable `error` field.
pub const GENERIC_FAILURE: &str = "Failed to upload file or download the result. Please try again.";
/// Shown when the error body is not JSON.
pub const UNPARSABLE_ERROR: &str = "Failed to parse error response. Please try again.";
/// Shown when the error body could not be read.
pub const UNREADABLE_ERROR: &str = "Failed to read error response. Please try again.";

/// Processed file returned by the endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedFile {
    /// Name to save under
    pub filename: String,
    /// Response `content-type`, if any
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Error payload of a non-2xx response: `{ "error": "<message>" }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Value,
}

/// POST `file` as multipart form data and collect the returned file.
pub async fn upload_csv(file: &File, config: &UploadConfig) -> UploadResult<ProcessedFile> {
    let setup_failed = |e: wasm_bindgen::JsValue| UploadError::RequestSetupFailed {
        reason: js_error_message(&e),
    };

    let form_data = FormData::new().map_err(setup_failed)?;
    form_data
        .append_with_blob_and_filename(&config.field_name, file, &file.name())
        .map_err(setup_failed)?;

    let controller = AbortController::new().map_err(setup_failed)?;
    // Dropping the timer cancels it, so it cannot fire after we return.
    let _timeout = config.request_timeout_ms.map(|millis| {
        let controller = controller.clone();
        Timeout::new(millis, move || {
            log::warn!("⏱️ Upload timed out after {} ms, aborting", millis);
            controller.abort();
        })
    });

    // No explicit Content-Type: the browser adds the multipart boundary.
    let request = Request::post(&config.endpoint)
        .abort_signal(Some(&controller.signal()))
        .body(form_data)
        .map_err(|e| UploadError::RequestSetupFailed {
            reason: e.to_string(),
        })?;

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::NoResponse {
            reason: e.to_string(),
        })?;

    if !response.ok() {
        return Err(rejection(&response).await);
    }

    let content_disposition = response.headers().get("content-disposition");
    let content_type = response.headers().get("content-type");
    let bytes = response
        .binary()
        .await
        .map_err(|e| UploadError::NoResponse {
            reason: format!("response body interrupted: {}", e),
        })?;

    let filename = resolve_filename(
        content_disposition.as_deref(),
        chrono::Utc::now().timestamp_millis(),
    );
    log::debug!("Received {} bytes as {}", bytes.len(), filename);

    Ok(ProcessedFile {
        filename,
        content_type,
        bytes,
    })
}

async fn rejection(response: &Response) -> UploadError {
    let status = response.status();
    let message = match response.binary().await {
        Ok(body) => server_error_message(&body),
        Err(e) => {
            log::warn!("Could not read error body: {}", e);
            UNREADABLE_ERROR.to_string()
        }
    };
    UploadError::ServerRejected { status, message }
}

/// Message for a non-2xx body: its `error` field when present, a generic
/// failure when absent, a parse failure when the body is not JSON.
pub fn server_error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { error: Value::String(message) }) if !message.is_empty() => message,
        Ok(_) => GENERIC_FAILURE.to_string(),
        Err(e) => {
            log::debug!("Error body is not JSON: {}", e);
            UNPARSABLE_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_is_shown_verbatim() {
        assert_eq!(server_error_message(br#"{"error":"bad rows"}"#), "bad rows");
        assert_eq!(
            server_error_message(br#"{"error":"Row 3: missing column \"id\"","code":42}"#),
            "Row 3: missing column \"id\""
        );
    }

    #[test]
    fn json_without_usable_error_is_generic() {
        for body in [&br#"{}"#[..], br#"{"message":"nope"}"#, br#"{"error":""}"#, br#"{"error":null}"#, br#"{"error":12}"#] {
            assert_eq!(server_error_message(body), GENERIC_FAILURE);
        }
    }

    #[test]
    fn non_json_body_is_parse_failure() {
        for body in [&b""[..], b"<html>502 Bad Gateway</html>", b"\xff\xfe", b"[1,2"] {
            assert_eq!(server_error_message(body), UNPARSABLE_ERROR);
        }
    }

    #[test]
    fn rejection_displays_server_message() {
        let err = UploadError::ServerRejected {
            status: 400,
            message: server_error_message(br#"{"error":"bad rows"}"#),
        };
        assert_eq!(err.to_string(), "bad rows");
    }
}
