//! Input validation for invoice form submissions
//!
//! One pass over the raw form yields either the typed field set or a
//! per-field error map; nothing here performs I/O.

pub mod schema;
pub mod validators;

pub use schema::parse_invoice_form;

use indexmap::IndexMap;

/// Mapping from form field name to the ordered list of human-readable
/// validation messages for that field. Insertion order follows the form's
/// field order, so error rendering matches the form layout.
pub type FieldErrors = IndexMap<String, Vec<String>>;
