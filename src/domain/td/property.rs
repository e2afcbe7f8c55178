// ============================================================
// PROPERTY AFFORDANCE TYPES
// ============================================================
// Strongly-typed TD property records produced by the import

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The read-channel descriptor of an imported property.
///
/// The importer only ever produces read affordances, so `op` is fixed
/// to `readproperty`. Optional fields serialize as absent keys, never
/// as `null`; downstream equality checks and serialized-size
/// minimality both depend on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordanceForm {
    pub op: String,

    pub href: String,

    #[serde(rename = "modbus:unitID", skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<f64>,

    #[serde(rename = "modbus:address")]
    pub address: f64,

    #[serde(rename = "modbus:quantity")]
    pub quantity: f64,

    #[serde(rename = "modbus:entity")]
    pub entity: String,

    #[serde(rename = "modbus:zeroBasedAddressing")]
    pub zero_based_addressing: bool,

    #[serde(rename = "modbus:mostSignificantByte")]
    pub most_significant_byte: bool,

    #[serde(rename = "modbus:mostSignificantWord")]
    pub most_significant_word: bool,

    /// Low-level register type tag (e.g. `xsd:float`)
    #[serde(rename = "modbus:type", skip_serializing_if = "Option::is_none")]
    pub modbus_type: Option<String>,

    #[serde(rename = "modbus:pollingTime", skip_serializing_if = "Option::is_none")]
    pub polling_time: Option<String>,

    #[serde(rename = "modbus:timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// The fixed operation tag carried by every imported form
pub const READ_OP: &str = "readproperty";

/// One imported property affordance. Always read-only, always with
/// exactly one form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(rename = "readOnly")]
    pub read_only: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    pub forms: Vec<AffordanceForm>,
}

impl Property {
    /// The single read form of this property
    pub fn form(&self) -> &AffordanceForm {
        &self.forms[0]
    }
}

/// Properties keyed by name. Insertion order follows input row order;
/// overwriting a name keeps its first-seen position and takes the
/// last-seen value.
pub type PropertyCollection = IndexMap<String, Property>;
