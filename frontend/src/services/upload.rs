//! HTTP service for uploading GWAS files to the standardization API.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{upload_url, UPLOAD_FIELD};
use crate::error::{js_error_message, UploadError, UploadResult};
use crate::types::FileResult;

/// Upload `files` in one multipart request and return one result per file.
///
/// Every file goes under the repeated `files` field with its original name.
/// Non-2xx answers are reported without reading the body.
pub async fn upload_files(files: &[File], base_url: &str) -> UploadResult<Vec<FileResult>> {
    let form_data = FormData::new().map_err(|e| UploadError::Request(js_error_message(e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| UploadError::Request(js_error_message(e)))?;
    }

    let url = upload_url(base_url);
    let response = Request::post(&url).body(form_data)?.send().await?;

    if !response.ok() {
        log::warn!("Upload rejected by {} with status {}", url, response.status());
        return Err(UploadError::Server {
            status: response.status(),
        });
    }

    let body = response.text().await?;
    decode_results(&body)
}

/// Parse a response body as the list of per-file results.
pub fn decode_results(body: &str) -> UploadResult<Vec<FileResult>> {
    Ok(serde_json::from_str(body)?)
}
