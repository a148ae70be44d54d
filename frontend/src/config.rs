//! Application configuration.
//!
//! Centralized configuration for the standardizer frontend. The WASM bundle
//! has no process environment at runtime, so the API location is baked in
//! at build time from `API_BASE_URL`.

/// Fallback API base URL when `API_BASE_URL` is unset or empty.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Upload endpoint path, appended to the API base URL.
pub const UPLOAD_PATH: &str = "/upload/";

/// Multipart field name repeated once per uploaded file.
pub const UPLOAD_FIELD: &str = "files";

/// Maximum number of files per upload action.
pub const MAX_FILES: usize = 3;

/// Accepted MIME types with their file extensions.
pub const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("text/plain", ".txt"),
    ("text/csv", ".csv"),
    ("text/tab-separated-values", ".tsv"),
    ("application/gzip", ".gz"),
    ("application/zip", ".zip"),
];

/// Application title, shown in the page header and the browser tab.
pub const APP_TITLE: &str = "GWAS Header Standardizer";

/// API base URL, without a trailing slash.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("API_BASE_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    let url = match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    };
    url.trim_end_matches('/')
}

/// Full URL of the upload endpoint under `base_url`.
pub fn upload_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), UPLOAD_PATH)
}

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_TYPES
        .iter()
        .flat_map(|(mime, ext)| [*mime, *ext])
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_when_unset() {
        assert_eq!(resolve_base_url(None), "http://127.0.0.1:8000");
        assert_eq!(resolve_base_url(Some("")), "http://127.0.0.1:8000");
        assert_eq!(resolve_base_url(Some("   ")), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_configured_base_url_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.org/")),
            "https://api.example.org"
        );
    }

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url("http://127.0.0.1:8000"), "http://127.0.0.1:8000/upload/");
        assert_eq!(upload_url("http://host/api/"), "http://host/api/upload/");
    }

    #[test]
    fn test_accept_attribute() {
        let accept = accept_attribute();
        assert!(accept.starts_with("text/plain,.txt,text/csv,.csv"));
        assert!(accept.ends_with("application/zip,.zip"));
    }
}
