// ============================================================
// TD DOMAIN LAYER
// ============================================================
// Typed property affordances and document-tree helpers

mod document;
mod property;

pub use document::{section_of, AffordanceCopy};
pub use property::{AffordanceForm, Property, PropertyCollection, READ_OP};
