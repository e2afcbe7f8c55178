// ============================================================
// CSV COLUMN CONTRACT
// ============================================================
// Column names and recognized value sets for the property import

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const NAME: &str = "name";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const TYPE: &str = "type";
pub const MINIMUM: &str = "minimum";
pub const MAXIMUM: &str = "maximum";
pub const UNIT: &str = "unit";
pub const HREF: &str = "href";
pub const UNIT_ID: &str = "modbus:unitID";
pub const ADDRESS: &str = "modbus:address";
pub const QUANTITY: &str = "modbus:quantity";
pub const MODBUS_TYPE: &str = "modbus:type";
pub const ZERO_BASED_ADDRESSING: &str = "modbus:zeroBasedAddressing";
pub const ENTITY: &str = "modbus:entity";
pub const POLLING_TIME: &str = "modbus:pollingTime";
pub const FUNCTION: &str = "modbus:function";
pub const MOST_SIGNIFICANT_BYTE: &str = "modbus:mostSignificantByte";
pub const MOST_SIGNIFICANT_WORD: &str = "modbus:mostSignificantWord";
pub const TIMEOUT: &str = "modbus:timeout";

/// Recognized `type` values. Matching is case-sensitive.
pub const VALUE_TYPES: &[&str] = &["number", "string", "boolean"];

/// Recognized `modbus:entity` values in canonical casing.
pub const MODBUS_ENTITIES: &[&str] = &[
    "HoldingRegister",
    "InputRegister",
    "Coil",
    "DiscreteInput",
];

static ENTITY_LOOKUP: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    MODBUS_ENTITIES
        .iter()
        .map(|canonical| (canonical.to_ascii_lowercase(), *canonical))
        .collect()
});

/// Check whether a `type` value is a recognized member of [`VALUE_TYPES`].
pub fn is_value_type(value: &str) -> bool {
    VALUE_TYPES.contains(&value)
}

/// Resolve an entity value to its canonical casing, matching
/// case-insensitively. Returns `None` when the value is not a
/// recognized entity kind at all.
pub fn canonical_entity(value: &str) -> Option<&'static str> {
    ENTITY_LOOKUP.get(&value.to_ascii_lowercase()).copied()
}
