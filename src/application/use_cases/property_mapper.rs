// ============================================================
// TYPE COERCION MAPPER
// ============================================================
// Turn one all-string row into a typed property affordance

use crate::domain::csv::columns;
use crate::domain::csv::RawRow;
use crate::domain::td::{AffordanceForm, Property, READ_OP};

/// Quantity used when the column is absent, empty, or malformed: a
/// single register or coil read.
const DEFAULT_QUANTITY: f64 = 1.0;

/// Map a tokenized row to a read-only property with exactly one form.
///
/// Total for any structurally valid row; required-field enforcement
/// lives in the aggregator. A present-but-malformed `modbus:address`
/// maps to NaN rather than failing, which callers of the standalone
/// mapper must account for.
pub fn map_row_to_property(row: &RawRow) -> Property {
    let form = AffordanceForm {
        op: READ_OP.to_string(),
        href: row.non_empty(columns::HREF).unwrap_or("/").to_string(),
        unit_id: parse_optional_number(row.value(columns::UNIT_ID)),
        address: parse_mandatory_number(row.value(columns::ADDRESS)),
        quantity: parse_optional_number(row.value(columns::QUANTITY)).unwrap_or(DEFAULT_QUANTITY),
        entity: row.value(columns::ENTITY).to_string(),
        zero_based_addressing: parse_bool(row.value(columns::ZERO_BASED_ADDRESSING)),
        most_significant_byte: parse_bool(row.value(columns::MOST_SIGNIFICANT_BYTE)),
        most_significant_word: parse_bool(row.value(columns::MOST_SIGNIFICANT_WORD)),
        modbus_type: optional_text(row, columns::MODBUS_TYPE),
        polling_time: optional_text(row, columns::POLLING_TIME),
        timeout: optional_text(row, columns::TIMEOUT),
    };

    Property {
        data_type: optional_text(row, columns::TYPE),
        read_only: true,
        title: optional_text(row, columns::TITLE),
        description: optional_text(row, columns::DESCRIPTION),
        minimum: parse_optional_number(row.value(columns::MINIMUM)),
        maximum: parse_optional_number(row.value(columns::MAXIMUM)),
        unit: optional_text(row, columns::UNIT),
        forms: vec![form],
    }
}

/// Empty or non-numeric values are omitted, never coerced to zero
fn parse_optional_number(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Mandatory fields keep a malformed value visible as NaN
fn parse_mandatory_number(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(f64::NAN)
}

/// Exact case-insensitive match against "true"; anything else is false
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn optional_text(row: &RawRow, column: &str) -> Option<String> {
    row.non_empty(column).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        let cells: IndexMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RawRow::new(2, cells)
    }

    #[test]
    fn test_full_row_maps_all_fields() {
        let property = map_row_to_property(&row(&[
            ("name", "temperature"),
            ("title", "Temperature"),
            ("description", "Ambient reading"),
            ("type", "number"),
            ("minimum", "-40"),
            ("maximum", "125.5"),
            ("unit", "C"),
            ("href", "/temperature"),
            ("modbus:unitID", "2"),
            ("modbus:address", "40001"),
            ("modbus:quantity", "2"),
            ("modbus:type", "xsd:float"),
            ("modbus:zeroBasedAddressing", "true"),
            ("modbus:entity", "HoldingRegister"),
            ("modbus:pollingTime", "1000"),
            ("modbus:mostSignificantByte", "TRUE"),
            ("modbus:mostSignificantWord", "false"),
            ("modbus:timeout", "2000"),
        ]));

        assert_eq!(property.data_type.as_deref(), Some("number"));
        assert!(property.read_only);
        assert_eq!(property.title.as_deref(), Some("Temperature"));
        assert_eq!(property.minimum, Some(-40.0));
        assert_eq!(property.maximum, Some(125.5));
        assert_eq!(property.unit.as_deref(), Some("C"));
        assert_eq!(property.forms.len(), 1);

        let form = property.form();
        assert_eq!(form.op, "readproperty");
        assert_eq!(form.href, "/temperature");
        assert_eq!(form.unit_id, Some(2.0));
        assert_eq!(form.address, 40001.0);
        assert_eq!(form.quantity, 2.0);
        assert_eq!(form.entity, "HoldingRegister");
        assert!(form.zero_based_addressing);
        assert!(form.most_significant_byte);
        assert!(!form.most_significant_word);
        assert_eq!(form.modbus_type.as_deref(), Some("xsd:float"));
        assert_eq!(form.polling_time.as_deref(), Some("1000"));
        assert_eq!(form.timeout.as_deref(), Some("2000"));
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let property = map_row_to_property(&row(&[
            ("name", "temperature"),
            ("unit", ""),
            ("minimum", ""),
            ("modbus:address", "40001"),
            ("modbus:entity", "Coil"),
        ]));

        assert_eq!(property.unit, None);
        assert_eq!(property.minimum, None);
        assert_eq!(property.title, None);
        assert_eq!(property.form().unit_id, None);
        assert_eq!(property.form().polling_time, None);
    }

    #[test]
    fn test_non_numeric_optional_number_is_omitted_not_zero() {
        let property = map_row_to_property(&row(&[("minimum", "cold"), ("maximum", "1e3")]));

        assert_eq!(property.minimum, None);
        assert_eq!(property.maximum, Some(1000.0));
    }

    #[test]
    fn test_malformed_address_maps_to_nan() {
        let property = map_row_to_property(&row(&[("modbus:address", "4x001")]));

        assert!(property.form().address.is_nan());
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let absent = map_row_to_property(&row(&[("modbus:address", "1")]));
        let malformed = map_row_to_property(&row(&[("modbus:quantity", "many")]));

        assert_eq!(absent.form().quantity, 1.0);
        assert_eq!(malformed.form().quantity, 1.0);
    }

    #[test]
    fn test_href_defaults_to_root() {
        let property = map_row_to_property(&row(&[("name", "reset")]));

        assert_eq!(property.form().href, "/");
    }

    #[test]
    fn test_boolean_coercion_accepts_only_true() {
        let truthy = map_row_to_property(&row(&[("modbus:zeroBasedAddressing", "True")]));
        let falsy = map_row_to_property(&row(&[("modbus:zeroBasedAddressing", "yes")]));

        assert!(truthy.form().zero_based_addressing);
        assert!(!falsy.form().zero_based_addressing);
    }

    #[test]
    fn test_unrecognized_type_is_still_carried_over() {
        let property = map_row_to_property(&row(&[("type", "int")]));

        assert_eq!(property.data_type.as_deref(), Some("int"));
    }

    #[test]
    fn test_entity_value_is_kept_verbatim() {
        let property = map_row_to_property(&row(&[("modbus:entity", "coil")]));

        assert_eq!(property.form().entity, "coil");
    }
}
