// ============================================================
// IMPORT CONFIGURATION
// ============================================================
// Tunable policies for the CSV-to-property import

use serde::{Deserialize, Serialize};

/// How to treat a recognized `modbus:entity` value whose casing
/// differs from the canonical form (e.g. `coil` vs `Coil`).
///
/// Recognition itself is always case-insensitive; the policy only
/// controls whether the non-canonical casing produces a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityCasingPolicy {
    /// Accept silently (default)
    Lenient,

    /// Accept, but emit an advisory casing warning
    WarnOnMismatch,
}

/// How to treat a data row whose `name` collides with an earlier row.
///
/// The later row always wins; the policy only controls whether the
/// overwrite is surfaced as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Last write wins silently (default)
    Overwrite,

    /// Last write wins, with an advisory warning per overwrite
    Warn,
}

/// Configuration for the CSV import pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Cell delimiter (default: `,`)
    pub delimiter: char,

    /// Casing policy for recognized entity values
    pub entity_casing: EntityCasingPolicy,

    /// Collision policy for duplicate property names
    pub duplicate_names: DuplicatePolicy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            entity_casing: EntityCasingPolicy::Lenient,
            duplicate_names: DuplicatePolicy::Overwrite,
        }
    }
}

impl ImportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that surfaces every advisory condition
    pub fn strict() -> Self {
        Self {
            entity_casing: EntityCasingPolicy::WarnOnMismatch,
            duplicate_names: DuplicatePolicy::Warn,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.delimiter.is_ascii() {
            return Err(format!("delimiter {:?} must be an ASCII character", self.delimiter));
        }
        if self.delimiter == '"' || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(format!("delimiter {:?} conflicts with the record syntax", self.delimiter));
        }
        Ok(())
    }
}
