// ============================================================
// CSV IMPORTER USE CASE
// ============================================================
// Orchestrate tokenization, validation and aggregation

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::domain::csv::{ImportConfig, ImportReport};
use crate::domain::error::{ImportError, Result};
use crate::infrastructure::csv::{read_import_file, tokenize};

use super::row_aggregator::map_csv_to_properties;
use super::row_validator::validate;

/// CSV-to-property import pipeline
pub struct CsvImporter {
    config: ImportConfig,
}

impl CsvImporter {
    /// Create a new importer
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(ImportConfig::default())
    }

    /// Import raw CSV text into a property collection.
    ///
    /// Advisory warnings accumulate alongside the token stream without
    /// short-circuiting; only the fatal conditions (empty input,
    /// malformed rows, missing required fields) abort the call.
    pub fn import_str(&self, text: &str) -> Result<ImportReport> {
        let start = Instant::now();

        self.config
            .validate()
            .map_err(ImportError::ConfigError)?;

        let rows = tokenize(text, &self.config)?;
        let mut warnings = validate(&rows, &self.config);

        let (properties, duplicate_warnings) = map_csv_to_properties(&rows, &self.config)?;
        warnings.extend(duplicate_warnings);

        let headers = rows
            .first()
            .map(|row| row.columns().map(str::to_string).collect())
            .unwrap_or_default();

        info!(
            rows = rows.len(),
            properties = properties.len(),
            warnings = warnings.len(),
            "CSV import complete"
        );

        Ok(ImportReport {
            properties,
            warnings,
            row_count: rows.len(),
            headers,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Import a CSV file, decoding legacy encodings when needed
    pub fn import_file(&self, path: &Path) -> Result<ImportReport> {
        info!(path = %path.display(), "importing CSV file");
        let text = read_import_file(path)?;
        self.import_str(&text)
    }
}
