//! Upload lifecycle state owned by the page.
//!
//! The page keeps one [`UploadState`] in a signal. Only the page mutates it;
//! renderers receive read-only views of the results and the error.
//!
//! ```text
//! Idle ──begin──▶ Loading ──Ok──▶ Ready
//!                    │
//!                    └──Err──▶ Failed
//! (any) ──begin──▶ Loading   results and error cleared first
//! ```
//!
//! Every `begin` hands out a ticket. An outcome carrying an older ticket
//! than the latest one is dropped, so overlapping uploads always show the
//! most recent request.

use crate::error::UploadResult;
use crate::types::FileResult;

/// Where the page is in the upload cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing uploaded yet.
    Idle,
    /// Waiting for the API.
    Loading,
    /// Last upload succeeded; results may still be empty.
    Ready,
    /// Last upload failed.
    Failed,
}

/// Identifies one upload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    loading: bool,
    error: Option<String>,
    results: Vec<FileResult>,
    completed: bool,
    latest: u64,
}

impl UploadState {
    /// Start a new request: enter loading and drop previous output.
    pub fn begin(&mut self) -> UploadTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        self.results.clear();
        self.completed = false;
        UploadTicket(self.latest)
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` when a newer request has started since, in which
    /// case the state is left untouched.
    pub fn finish(&mut self, ticket: UploadTicket, outcome: UploadResult<Vec<FileResult>>) -> bool {
        if ticket.0 != self.latest {
            log::debug!(
                "Discarding response for upload #{} (latest is #{})",
                ticket.0,
                self.latest
            );
            return false;
        }

        match outcome {
            Ok(results) => self.results = results,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        self.completed = true;
        true
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.completed {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[FileResult] {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;

    fn sample() -> FileResult {
        serde_json::from_str(
            r#"{"fileName": "sample.csv", "header": ["chr", "pos", "p"],
                "rows": [["1", "100", 0.05]],
                "column_mapping": {"CHR": {"mapped_from": "chr", "score": 95}},
                "warnings": [], "errors": []}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = UploadState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_loading());
        assert!(state.results().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_success_stores_results() {
        let mut state = UploadState::default();
        let ticket = state.begin();
        assert_eq!(state.phase(), Phase::Loading);

        assert!(state.finish(ticket, Ok(vec![sample(), sample()])));
        assert_eq!(state.phase(), Phase::Ready);
        assert!(!state.is_loading());
        assert_eq!(state.results().len(), 2);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_server_error_shows_banner_without_results() {
        let mut state = UploadState::default();
        let ticket = state.begin();

        state.finish(ticket, Err(UploadError::Server { status: 500 }));
        assert_eq!(state.phase(), Phase::Failed);
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Server responded with an error"));
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_network_error_keeps_message() {
        let mut state = UploadState::default();
        let ticket = state.begin();

        state.finish(ticket, Err(UploadError::Network("Failed to fetch".into())));
        assert_eq!(state.error(), Some("Failed to fetch"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_begin_clears_previous_output() {
        let mut state = UploadState::default();
        let first = state.begin();
        state.finish(first, Ok(vec![sample()]));

        state.begin();
        assert!(state.results().is_empty());
        assert!(state.is_loading());

        let mut state = UploadState::default();
        let first = state.begin();
        state.finish(first, Err(UploadError::Decode("expected value".into())));

        state.begin();
        assert!(state.error().is_none());
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn test_reupload_is_idempotent() {
        let mut once = UploadState::default();
        let ticket = once.begin();
        once.finish(ticket, Ok(vec![sample()]));
        let after_first = once.results().to_vec();

        let ticket = once.begin();
        once.finish(ticket, Ok(vec![sample()]));

        assert_eq!(once.results(), after_first.as_slice());
        assert_eq!(once.phase(), Phase::Ready);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = UploadState::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.finish(second, Ok(vec![sample()])));
        assert!(!state.finish(first, Err(UploadError::Server { status: 502 })));

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.results().len(), 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_loading_until_latest_resolves() {
        let mut state = UploadState::default();
        let first = state.begin();
        let second = state.begin();

        state.finish(first, Ok(vec![sample()]));
        assert!(state.is_loading());
        assert!(state.results().is_empty());

        state.finish(second, Ok(vec![]));
        assert!(!state.is_loading());
        assert_eq!(state.phase(), Phase::Ready);
    }
}
