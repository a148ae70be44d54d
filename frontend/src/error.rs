//! Error types for the upload round trip.
//!
//! Every failure ends up as one line in the page's error banner, so the
//! `Display` text of each variant is exactly what the user reads.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Shown when a thrown JS value carries no message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Errors while uploading files to the standardization API.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UploadError {
    /// The multipart body could not be built.
    #[error("{0}")]
    Request(String),

    /// The request never got a response, or its body could not be read.
    #[error("{0}")]
    Network(String),

    /// The API answered with a non-2xx status. The body is not inspected.
    #[error("Server responded with an error")]
    Server { status: u16 },

    /// The body was not a JSON array of file results.
    #[error("{0}")]
    Decode(String),
}

impl From<gloo_net::Error> for UploadError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => UploadError::Network(non_empty(js.message)),
            gloo_net::Error::SerdeError(e) => UploadError::Decode(e.to_string()),
            other => UploadError::Network(non_empty(other.to_string())),
        }
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::Decode(err.to_string())
    }
}

/// Message of a thrown JS value, or [`UNKNOWN_ERROR`].
pub fn js_error_message(value: JsValue) -> String {
    match gloo_utils::errors::JsError::try_from(value) {
        Ok(js) => non_empty(js.message),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
