// ============================================================
// ROW AGGREGATOR
// ============================================================
// Fold mapped rows into a name-keyed property collection

use tracing::warn;

use crate::domain::csv::columns;
use crate::domain::csv::{DuplicatePolicy, ImportConfig, RawRow, Warning};
use crate::domain::error::{ImportError, Result};
use crate::domain::td::PropertyCollection;

use super::property_mapper::map_row_to_property;

/// Aggregate tokenized rows into a property collection keyed by name.
///
/// Fails fast: the first row violating a required-field rule aborts
/// the whole aggregation, checked per row in the order name, address,
/// entity. Duplicate names overwrite last-write-wins while keeping the
/// first-seen position; under [`DuplicatePolicy::Warn`] each overwrite
/// also emits an advisory warning. An empty row sequence yields an
/// empty collection.
pub fn map_csv_to_properties(
    rows: &[RawRow],
    config: &ImportConfig,
) -> Result<(PropertyCollection, Vec<Warning>)> {
    let mut properties = PropertyCollection::new();
    let mut warnings = Vec::new();

    for row in rows {
        let name = row
            .non_empty(columns::NAME)
            .ok_or_else(|| ImportError::RequiredField("Row name is required".to_string()))?;

        if row.non_empty(columns::ADDRESS).is_none() {
            return Err(ImportError::RequiredField(format!(
                "\"modbus:address\" value is required for row: \"{}\"",
                name
            )));
        }

        if row.non_empty(columns::ENTITY).is_none() {
            return Err(ImportError::RequiredField(format!(
                "\"modbus:entity\" value is required for row: \"{}\"",
                name
            )));
        }

        if properties.contains_key(name) {
            warn!(row = row.row_number, name, "duplicate property name, later row wins");
            if config.duplicate_names == DuplicatePolicy::Warn {
                warnings.push(Warning::new(
                    row.row_number,
                    columns::NAME,
                    format!("Duplicate property name \"{}\" overwrites an earlier row", name),
                ));
            }
        }

        properties.insert(name.to_string(), map_row_to_property(row));
    }

    Ok((properties, warnings))
}
