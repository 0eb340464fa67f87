//! Record trait defining the field-access contract for all entity types

use crate::core::field::FieldValue;

/// Placeholder written to export cells whose optional relation is missing,
/// so a column is never empty or ambiguous.
pub const NOT_ASSIGNED: &str = "Not assigned";

/// A record the query engine can filter, sort, aggregate, and export.
///
/// The engine never assumes a fixed schema: every field access goes through
/// [`Record::field_value`], and unknown or absent fields yield `None`, which
/// predicates treat as a non-match rather than an error. Each entity type
/// supplies only its searchable field list and export column order; the
/// engine itself is defined once.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular entity name, also used in export file names (e.g. "booking")
    fn entity_name() -> &'static str;

    /// Fields the free-text search box matches, OR-combined
    fn searchable_fields() -> &'static [&'static str];

    /// Get the value of a field by name.
    ///
    /// Nested sub-objects are addressed with dotted paths
    /// (e.g. `customer.name`). Returns `None` for unknown fields and
    /// `Some(FieldValue::Null)` for known-but-absent optional relations.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Fixed export column order for this entity type
    fn export_columns() -> &'static [&'static str];

    /// One export cell per entry in [`Record::export_columns`]
    fn export_row(&self) -> Vec<String>;
}
