//! File selection policy for the upload zone.
//!
//! Decides which dropped or picked files may be uploaded. A file passes the
//! type check when its MIME type or its extension is in the accepted list.
//! When more than the allowed number of files pass, the whole selection is
//! refused.

use crate::config::{ACCEPTED_TYPES, MAX_FILES};

/// Anything the selection policy can look at.
pub trait UploadCandidate {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
}

impl UploadCandidate for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Why a file was kept out of the upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    InvalidType,
    TooManyFiles,
}

/// Accepted and rejected files of one drop or picker selection.
#[derive(Debug)]
pub struct Selection<F> {
    accepted: Vec<F>,
    rejected: Vec<(F, RejectReason)>,
}

impl<F> Selection<F> {
    /// Files to upload, in selection order.
    pub fn accepted(&self) -> &[F] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[(F, RejectReason)] {
        &self.rejected
    }

    pub fn into_parts(self) -> (Vec<F>, Vec<(F, RejectReason)>) {
        (self.accepted, self.rejected)
    }
}

/// Accepted types and file count for one upload action.
#[derive(Clone, Debug)]
pub struct SelectionPolicy {
    accepted_types: &'static [(&'static str, &'static str)],
    max_files: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            accepted_types: ACCEPTED_TYPES,
            max_files: MAX_FILES,
        }
    }
}

impl SelectionPolicy {
    /// Whether a single file has an accepted type.
    pub fn accepts<F: UploadCandidate>(&self, file: &F) -> bool {
        let mime = file.mime_type().to_ascii_lowercase();
        let name = file.file_name().to_ascii_lowercase();

        self.accepted_types
            .iter()
            .any(|(accepted_mime, ext)| mime == *accepted_mime || name.ends_with(ext))
    }

    /// Split `files` into accepted and rejected, keeping their order.
    pub fn select<F: UploadCandidate>(&self, files: Vec<F>) -> Selection<F> {
        let mut accepted = Vec::with_capacity(files.len());
        let mut rejected = Vec::new();

        for file in files {
            if self.accepts(&file) {
                accepted.push(file);
            } else {
                rejected.push((file, RejectReason::InvalidType));
            }
        }

        if accepted.len() > self.max_files {
            rejected.extend(accepted.drain(..).map(|f| (f, RejectReason::TooManyFiles)));
        }

        Selection { accepted, rejected }
    }
}

/// In-memory files for host tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::UploadCandidate;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: &'static str,
        pub mime: &'static str,
    }

    impl UploadCandidate for FakeFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    pub(crate) fn file(name: &'static str, mime: &'static str) -> FakeFile {
        FakeFile { name, mime }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::file;
    use super::*;

    #[test]
    fn test_valid_files_kept_in_order() {
        let files = vec![
            file("b.tsv", "text/tab-separated-values"),
            file("a.csv", "text/csv"),
            file("c.gz", "application/gzip"),
        ];
        let selection = SelectionPolicy::default().select(files.clone());

        assert_eq!(selection.accepted(), files.as_slice());
        assert!(selection.rejected().is_empty());
    }

    #[test]
    fn test_single_file() {
        let selection = SelectionPolicy::default().select(vec![file("sample.csv", "text/csv")]);
        assert_eq!(selection.accepted().len(), 1);
    }

    #[test]
    fn test_more_than_three_rejects_all() {
        let files = vec![
            file("1.csv", "text/csv"),
            file("2.csv", "text/csv"),
            file("3.csv", "text/csv"),
            file("4.csv", "text/csv"),
        ];
        let selection = SelectionPolicy::default().select(files);

        assert!(selection.accepted().is_empty());
        assert_eq!(selection.rejected().len(), 4);
        assert!(selection
            .rejected()
            .iter()
            .all(|(_, reason)| *reason == RejectReason::TooManyFiles));
    }

    #[test]
    fn test_disallowed_type_rejected() {
        let selection = SelectionPolicy::default().select(vec![file("report.pdf", "application/pdf")]);

        assert!(selection.accepted().is_empty());
        assert_eq!(selection.rejected()[0].1, RejectReason::InvalidType);
    }

    #[test]
    fn test_mixed_selection_keeps_valid_files() {
        let files = vec![
            file("a.csv", "text/csv"),
            file("photo.png", "image/png"),
            file("b.zip", "application/zip"),
        ];
        let (accepted, rejected) = SelectionPolicy::default().select(files).into_parts();

        assert_eq!(accepted, vec![file("a.csv", "text/csv"), file("b.zip", "application/zip")]);
        assert_eq!(rejected, vec![(file("photo.png", "image/png"), RejectReason::InvalidType)]);
    }

    #[test]
    fn test_invalid_types_do_not_count_towards_limit() {
        let files = vec![
            file("a.csv", "text/csv"),
            file("b.csv", "text/csv"),
            file("c.csv", "text/csv"),
            file("notes.docx", ""),
        ];
        let selection = SelectionPolicy::default().select(files);

        assert_eq!(selection.accepted().len(), 3);
        assert_eq!(selection.rejected().len(), 1);
    }

    #[test]
    fn test_extension_fallback_when_mime_missing() {
        let policy = SelectionPolicy::default();
        assert!(policy.accepts(&file("sumstats.tsv", "")));
        assert!(policy.accepts(&file("data.csv", "application/vnd.ms-excel")));
        assert!(policy.accepts(&file("GWAS.TXT.GZ", "application/x-gzip")));
        assert!(!policy.accepts(&file("data.xlsx", "")));
    }

    #[test]
    fn test_mime_match_without_extension() {
        assert!(SelectionPolicy::default().accepts(&file("upload", "text/plain")));
    }
}
