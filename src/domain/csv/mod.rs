// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for the property import
// No I/O, no async

pub mod columns;
mod import_config;
mod raw_row;

pub use import_config::{DuplicatePolicy, EntityCasingPolicy, ImportConfig};
pub use raw_row::{ImportReport, RawRow, Warning};
