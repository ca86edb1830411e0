//! Saving the processed file on the user's machine.
//!
//! The browser has no "save" API; a hidden `<a download>` pointing at an
//! object URL is clicked instead.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::types::{js_error_message, UploadError, UploadResult};

/// Blob type used when the response does not declare one.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Name for the downloaded file.
///
/// Uses the `filename=` token of a `Content-Disposition` header, with quote
/// characters removed. Falls back to `output-<unix millis>.csv` when the
/// header is absent or yields nothing usable.
pub fn resolve_filename(content_disposition: Option<&str>, now_millis: i64) -> String {
    content_disposition
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback_filename(now_millis))
}

/// `output-<millis>.csv`
pub fn fallback_filename(now_millis: i64) -> String {
    format!("output-{}.csv", now_millis)
}

fn filename_from_disposition(header: &str) -> Option<String> {
    const TOKEN: &str = "filename=";
    // ASCII lowercasing keeps byte offsets identical.
    let start = header.to_ascii_lowercase().find(TOKEN)? + TOKEN.len();
    let value = header[start..].split(';').next().unwrap_or_default();
    let name: String = value.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Trigger a browser download of `bytes` under `filename`.
pub fn save_file(bytes: &[u8], filename: &str, content_type: Option<&str>) -> UploadResult<()> {
    let save_failed = |e: wasm_bindgen::JsValue| UploadError::SaveFailed {
        reason: js_error_message(&e),
    };

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(content_type.unwrap_or(FALLBACK_CONTENT_TYPE));
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(save_failed)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(save_failed)?;
    let result = click_download_link(&url, filename).map_err(save_failed);
    // Revoke even if the click failed.
    if let Err(e) = Url::revoke_object_url(&url) {
        log::warn!("Could not revoke object URL: {}", js_error_message(&e));
    }
    result
}

fn click_download_link(url: &str, filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    let document = gloo_utils::document();
    let body = document
        .body()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("document has no <body>"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
