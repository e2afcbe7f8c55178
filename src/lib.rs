//! CSV import and affordance-copy core for a Thing Description editor.
//!
//! The import pipeline turns loosely-typed spreadsheet rows into
//! validated, read-only Modbus property affordances; the copy
//! operation duplicates an existing affordance of a TD under a fresh,
//! collision-free name while preserving sibling ordering. Everything
//! is synchronous and side-effect-free on its inputs: anomalies either
//! abort the call with a typed [`ImportError`] or come back as
//! [`Warning`]s next to the data, and the caller decides what to block.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::use_cases::copy_affordance::copy_affordance;
pub use application::use_cases::csv_importer::CsvImporter;
pub use application::use_cases::property_mapper::map_row_to_property;
pub use application::use_cases::row_aggregator::map_csv_to_properties;
pub use application::use_cases::row_validator::validate;
pub use domain::csv::{DuplicatePolicy, EntityCasingPolicy, ImportConfig, ImportReport, RawRow, Warning};
pub use domain::error::{ImportError, Result};
pub use domain::td::{AffordanceCopy, AffordanceForm, Property, PropertyCollection};
pub use infrastructure::csv::{detect_delimiter, serialize_rows, tokenize};
