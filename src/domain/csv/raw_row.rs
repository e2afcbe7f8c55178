// ============================================================
// RAW ROW TYPES
// ============================================================
// Data structures representing tokenized CSV content

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::td::PropertyCollection;

/// A single tokenized CSV row: header-keyed cells in header order.
///
/// Cells are trimmed during tokenization; a cell that was empty or
/// whitespace-only holds the empty string. The row number is the
/// 1-based position in the source file, with the header counted as
/// row 1, so the first data row is row 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based source position (header = row 1)
    pub row_number: usize,

    /// Cells keyed by header name, in header order
    cells: IndexMap<String, String>,
}

impl RawRow {
    /// Create a new raw row from already-trimmed cells
    pub fn new(row_number: usize, cells: IndexMap<String, String>) -> Self {
        Self { row_number, cells }
    }

    /// Get a cell value; absent columns read as the empty string
    pub fn value(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// Get a cell value only when it is non-empty
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        let value = self.value(column);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Whether every cell in this row is empty
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.is_empty())
    }

    /// Header names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// All cells in header order
    pub fn cells(&self) -> &IndexMap<String, String> {
        &self.cells
    }
}

/// An advisory finding attached to a row during validation.
///
/// Warnings never remove the offending row from the result set; the
/// caller decides whether to block the import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// 1-based source row (header = row 1)
    pub row: usize,

    /// Column the finding is tagged to
    pub column: String,

    /// Human-readable description
    pub message: String,
}

impl Warning {
    /// Create a new warning
    pub fn new(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column \"{}\": {}", self.row, self.column, self.message)
    }
}

/// Result of a full CSV import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Imported properties, keyed by name in input row order
    pub properties: PropertyCollection,

    /// Advisory findings, in row order
    pub warnings: Vec<Warning>,

    /// Number of data rows tokenized (blank rows excluded)
    pub row_count: usize,

    /// Header names as they appeared in the file
    pub headers: Vec<String>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
