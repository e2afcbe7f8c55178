use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportError {
    /// The CSV input was empty or contained only whitespace.
    EmptyInput,
    /// A row could not be tokenized (cell count mismatch, broken quoting).
    /// Carries the 1-based row number, header counted as row 1.
    MalformedRow { row: usize, message: String },
    /// A required field was empty or absent during aggregation.
    RequiredField(String),
    /// The document or the requested section is missing during copy.
    MissingSection(String),
    NotFound(String),
    ParseError(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::EmptyInput => write!(f, "CSV input is empty"),
            ImportError::MalformedRow { row, message } => {
                write!(f, "Malformed CSV row {}: {}", row, message)
            }
            ImportError::RequiredField(msg) => write!(f, "Error on CSV file: {}", msg),
            ImportError::MissingSection(section) => {
                write!(f, "TD or section \"{}\" missing", section)
            }
            ImportError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ImportError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ImportError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ImportError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
