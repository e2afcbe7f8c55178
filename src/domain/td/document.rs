// ============================================================
// THING DESCRIPTION DOCUMENT
// ============================================================
// Helpers over the raw TD tree; affordance contents stay opaque

use serde_json::{Map, Value};

/// Look up a section ("properties", "actions", "events") in a TD.
/// Returns `None` when the document is not an object or the section
/// is absent or not an object.
pub fn section_of<'a>(document: &'a Value, section: &str) -> Option<&'a Map<String, Value>> {
    document.as_object()?.get(section)?.as_object()
}

/// Result of duplicating an affordance inside a TD
#[derive(Debug, Clone)]
pub struct AffordanceCopy {
    /// The document carrying the inserted clone. Callers must use this
    /// going forward; the input document is left untouched.
    pub document: Value,

    /// The collision-free name the clone was inserted under
    pub new_name: String,
}
