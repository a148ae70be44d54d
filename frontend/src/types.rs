//! Common types used across the frontend application.
//!
//! These mirror the JSON produced by the standardization API. The UI only
//! reads them; nothing here is validated or recomputed client-side.
//!
//! # Categories
//!
//! - **API Types** - Per-file upload results
//! - **Cell Types** - Preview table values

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Result for a single uploaded file.
///
/// The API answers an upload with one `FileResult` per file, in upload order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResult {
    /// Name of the uploaded file (or the archive member that was read)
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Column names as detected in the source file
    pub header: Vec<String>,
    /// Preview rows, each as wide as `header`
    pub rows: Vec<Vec<Cell>>,
    /// Standard column name -> source column it was matched to
    pub column_mapping: ColumnMapping,
    /// Non-fatal issues
    pub warnings: Vec<String>,
    /// Reasons the file could not be fully processed
    pub errors: Vec<String>,
}

/// A source column matched to a standard column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMatch {
    /// Original column name in the uploaded file
    pub mapped_from: String,
    /// Match confidence, nominally 0-100
    pub score: f64,
}

/// Standard column name -> matched source column, in the order the API sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnMapping(Vec<(String, ColumnMatch)>);

impl ColumnMapping {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnMatch)> {
        self.0.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn get(&self, standard: &str) -> Option<&ColumnMatch> {
        self.0.iter().find(|(name, _)| name == standard).map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, m) in &self.0 {
            map.serialize_entry(name, m)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColumnMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ColumnMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of standard column names to matches")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, m)) = access.next_entry::<String, ColumnMatch>()? {
                    entries.push((name, m));
                }
                Ok(ColumnMapping(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

// =============================================================================
// Cell Types
// =============================================================================

/// A single value in the preview table.
///
/// Missing values arrive as JSON `null`. Booleans and nulls render as empty
/// cells, the same way a browser page built from this JSON leaves them blank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    write!(f, "{}", n)
                } else {
                    f.write_str(&format_number(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Cell::Bool(_) | Cell::Null => Ok(()),
        }
    }
}

/// Format a number the way a browser prints it.
///
/// Integral values drop the fractional part and very small or very large
/// magnitudes switch to exponent notation (`1e-8`, `1e+21`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
