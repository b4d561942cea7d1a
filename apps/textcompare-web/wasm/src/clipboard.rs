//! System clipboard access
//!
//! The browser Clipboard API is promise-based and the host may deny the
//! write (permissions, non-secure context). Failures are surfaced to the
//! caller; comparison state is never affected.

use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard is not available in this context")]
    Unavailable,

    #[error("Clipboard write was rejected: {0}")]
    WriteRejected(String),
}

/// Write a string to the system clipboard
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| ClipboardError::WriteRejected(js_error_message(&e)))?;

    Ok(())
}

/// Best-effort message extraction from a rejected promise value
fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Error::from(value.clone())
        .message()
        .as_string()
        .unwrap_or_else(|| "unknown clipboard error".to_string())
}
