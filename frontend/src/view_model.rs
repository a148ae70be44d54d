//! Display strings for a result card.
//!
//! Keeps the formatting rules out of the view so they can be tested on the
//! host without a DOM.

use crate::types::{format_number, FileResult};

/// One line of the mapping table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingRow {
    pub standard: String,
    pub mapped_from: String,
    pub score: String,
}

/// Everything a [`FileResultCard`](crate::components::FileResultCard) shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCardModel {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub mappings: Vec<MappingRow>,
    /// `None` when there is nothing to warn about.
    pub warnings: Option<Vec<String>>,
    /// `None` when the file had no errors.
    pub errors: Option<Vec<String>>,
}

impl From<&FileResult> for ResultCardModel {
    fn from(result: &FileResult) -> Self {
        let rows = result
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let mappings = result
            .column_mapping
            .iter()
            .map(|(standard, m)| MappingRow {
                standard: standard.to_string(),
                mapped_from: m.mapped_from.clone(),
                score: format_score(m.score),
            })
            .collect();

        Self {
            title: result.file_name.clone(),
            header: result.header.clone(),
            rows,
            mappings,
            warnings: non_empty(&result.warnings),
            errors: non_empty(&result.errors),
        }
    }
}

/// Match score as a percentage label, e.g. `95%`.
pub fn format_score(score: f64) -> String {
    format!("{}%", format_number(score))
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}
