// ============================================================
// COPY AFFORDANCE USE CASE
// ============================================================
// Duplicate a TD affordance under a fresh, collision-free name

use serde_json::{Map, Value};
use tracing::info;

use crate::domain::error::{ImportError, Result};
use crate::domain::td::{section_of, AffordanceCopy};

/// Duplicate `affordance` inside `document[section]`, inserting the
/// deep clone immediately after `original_name` in the section's
/// iteration order.
///
/// The clone shares no nested structure with the source; a non-empty
/// source `title` becomes `<title> copy`. The input document is left
/// untouched; callers must use the returned document going forward.
pub fn copy_affordance(
    document: &Value,
    section: &str,
    original_name: &str,
    affordance: &Value,
) -> Result<AffordanceCopy> {
    let section_map = section_of(document, section)
        .ok_or_else(|| ImportError::MissingSection(section.to_string()))?;

    let new_name = disambiguate_name(section_map, original_name);
    let clone = clone_with_title_suffix(affordance);

    // Rebuild the section as an ordered key/value sequence so the
    // clone lands right after the original, wherever that is.
    let mut rebuilt = Map::new();
    let mut inserted = false;
    for (key, value) in section_map {
        rebuilt.insert(key.clone(), value.clone());
        if key == original_name {
            rebuilt.insert(new_name.clone(), clone.clone());
            inserted = true;
        }
    }
    if !inserted {
        rebuilt.insert(new_name.clone(), clone);
    }

    let mut updated = document.clone();
    if let Some(root) = updated.as_object_mut() {
        root.insert(section.to_string(), Value::Object(rebuilt));
    }

    info!(section, original = original_name, copy = %new_name, "duplicated affordance");

    Ok(AffordanceCopy {
        document: updated,
        new_name,
    })
}

/// Probe `<name>_copy`, `<name>_copy_1`, `<name>_copy_2`, ... until a
/// key unused in the section is found.
fn disambiguate_name(section: &Map<String, Value>, original_name: &str) -> String {
    let base = format!("{}_copy", original_name);
    if !section.contains_key(&base) {
        return base;
    }

    let mut counter = 1u64;
    loop {
        let candidate = format!("{}_{}", base, counter);
        if !section.contains_key(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Deep clone with `" copy"` appended to a non-empty title; an absent
/// title stays absent.
fn clone_with_title_suffix(affordance: &Value) -> Value {
    let suffixed_title = affordance
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .map(|title| format!("{} copy", title));

    let mut clone = affordance.clone();
    if let (Some(title), Some(object)) = (suffixed_title, clone.as_object_mut()) {
        object.insert("title".to_string(), Value::String(title));
    }
    clone
}
