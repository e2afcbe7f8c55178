// ============================================================
// ROW VALIDATOR
// ============================================================
// Advisory checks on tokenized rows; never discards a row

use crate::domain::csv::columns;
use crate::domain::csv::{EntityCasingPolicy, ImportConfig, RawRow, Warning};

/// Validate tokenized rows against the recognized `type` and
/// `modbus:entity` value sets.
///
/// Violations produce warnings, never failures: the offending rows are
/// still imported and the caller decides whether to block. Warnings
/// follow row order; within a row, the `type` check runs before the
/// entity check. Absence of either field is not a warning.
pub fn validate(rows: &[RawRow], config: &ImportConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for row in rows {
        if let Some(value) = row.non_empty(columns::TYPE) {
            if !columns::is_value_type(value) {
                warnings.push(Warning::new(
                    row.row_number,
                    columns::TYPE,
                    format!("Invalid type \"{}\"", value),
                ));
            }
        }

        if let Some(value) = row.non_empty(columns::ENTITY) {
            match columns::canonical_entity(value) {
                None => warnings.push(Warning::new(
                    row.row_number,
                    columns::ENTITY,
                    format!("Invalid modbus entity \"{}\"", value),
                )),
                Some(canonical) => {
                    if config.entity_casing == EntityCasingPolicy::WarnOnMismatch
                        && value != canonical
                    {
                        warnings.push(Warning::new(
                            row.row_number,
                            columns::ENTITY,
                            format!("Non-canonical casing for modbus entity \"{}\"", value),
                        ));
                    }
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn row(row_number: usize, pairs: &[(&str, &str)]) -> RawRow {
        let cells: IndexMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RawRow::new(row_number, cells)
    }

    #[test]
    fn test_canonical_values_produce_no_warnings() {
        let rows = vec![
            row(2, &[("type", "number"), ("modbus:entity", "HoldingRegister")]),
            row(3, &[("type", "boolean"), ("modbus:entity", "Coil")]),
        ];

        assert!(validate(&rows, &ImportConfig::default()).is_empty());
    }

    #[test]
    fn test_unknown_type_warns() {
        let rows = vec![row(2, &[("type", "int")])];
        let warnings = validate(&rows, &ImportConfig::default());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].row, 2);
        assert_eq!(warnings[0].column, "type");
        assert_eq!(warnings[0].message, "Invalid type \"int\"");
    }

    #[test]
    fn test_type_check_is_case_sensitive() {
        let rows = vec![row(2, &[("type", "Number")])];
        let warnings = validate(&rows, &ImportConfig::default());

        assert_eq!(warnings[0].message, "Invalid type \"Number\"");
    }

    #[test]
    fn test_unknown_entity_warns() {
        let rows = vec![row(4, &[("modbus:entity", "Register")])];
        let warnings = validate(&rows, &ImportConfig::default());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].row, 4);
        assert_eq!(warnings[0].column, "modbus:entity");
        assert_eq!(warnings[0].message, "Invalid modbus entity \"Register\"");
    }

    #[test]
    fn test_mis_cased_entity_is_silent_under_lenient_policy() {
        let rows = vec![row(2, &[("modbus:entity", "coil")])];

        assert!(validate(&rows, &ImportConfig::default()).is_empty());
    }

    #[test]
    fn test_mis_cased_entity_warns_under_strict_policy() {
        let rows = vec![row(2, &[("modbus:entity", "coil")])];
        let warnings = validate(&rows, &ImportConfig::strict());

        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Non-canonical casing for modbus entity \"coil\""
        );
    }

    #[test]
    fn test_absent_fields_are_not_warnings() {
        let rows = vec![row(2, &[("name", "temperature")]), row(3, &[("type", "")])];

        assert!(validate(&rows, &ImportConfig::default()).is_empty());
    }

    #[test]
    fn test_warning_order_follows_rows_then_type_before_entity() {
        let rows = vec![
            row(2, &[("type", "float"), ("modbus:entity", "Tank")]),
            row(3, &[("type", "int")]),
        ];
        let warnings = validate(&rows, &ImportConfig::default());

        let tags: Vec<(usize, &str)> = warnings
            .iter()
            .map(|w| (w.row, w.column.as_str()))
            .collect();
        assert_eq!(tags, vec![(2, "type"), (2, "modbus:entity"), (3, "type")]);
    }
}
