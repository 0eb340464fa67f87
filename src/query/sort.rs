//! Stable sorting of filtered record sets

use crate::core::field::FieldValue;
use crate::core::record::Record;
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A field selector plus direction.
///
/// The underlying sort is stable: records with equal keys keep their input
/// order, so unrelated filter changes never visibly reshuffle equal-ranked
/// rows. Comparison is numeric for numbers, calendar-based for ISO dates,
/// and case-folded for strings; records missing the field sort first.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

impl SortSpec {
    pub fn asc(field: &str) -> Self {
        SortSpec {
            field: field.to_string(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: &str) -> Self {
        SortSpec {
            field: field.to_string(),
            direction: Direction::Descending,
        }
    }

    /// Parse the wire format: `field`, `field:asc`, or `field:desc`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        match s.split_once(':') {
            Some((field, "desc")) => Some(SortSpec::desc(field)),
            Some((field, _)) => Some(SortSpec::asc(field)),
            None => Some(SortSpec::asc(s)),
        }
    }

    /// Sort records in place (stable)
    pub fn apply<R: Record>(&self, records: &mut [R]) {
        records.sort_by(|a, b| {
            let ka = a.field_value(&self.field).unwrap_or(FieldValue::Null);
            let kb = b.field_value(&self.field).unwrap_or(FieldValue::Null);
            let ord = ka.query_cmp(&kb);
            match self.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });
    }

    /// Compare two records under this spec without sorting
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let ka = a.field_value(&self.field).unwrap_or(FieldValue::Null);
        let kb = b.field_value(&self.field).unwrap_or(FieldValue::Null);
        let ord = ka.query_cmp(&kb);
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Payment;

    fn payments() -> Vec<Payment> {
        vec![
            Payment::sample("TXN-001", "Sarah", "Alex", "Electrician", 100.0, "completed", "Credit Card", "2024-2-1"),
            Payment::sample("TXN-002", "mike", "John", "Plumber", 25.0, "pending", "PayPal", "2024-1-15"),
            Payment::sample("TXN-003", "Zoe", "Rachel", "Car Wash", 100.0, "completed", "PayPal", "2024-10-1"),
        ]
    }

    #[test]
    fn test_parse() {
        let spec = SortSpec::parse("amount:desc").unwrap();
        assert_eq!(spec.field, "amount");
        assert_eq!(spec.direction, Direction::Descending);

        let spec = SortSpec::parse("customer").unwrap();
        assert_eq!(spec.direction, Direction::Ascending);

        assert!(SortSpec::parse("  ").is_none());
    }

    #[test]
    fn test_numeric_sort() {
        let mut records = payments();
        SortSpec::asc("amount").apply(&mut records);
        let ids: Vec<_> = records.iter().map(|p| p.transaction_id.as_str()).collect();
        assert_eq!(ids, ["TXN-002", "TXN-001", "TXN-003"]);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        // TXN-001 and TXN-003 share amount 100.0 and must keep input order
        let mut records = payments();
        SortSpec::desc("amount").apply(&mut records);
        let ids: Vec<_> = records.iter().map(|p| p.transaction_id.as_str()).collect();
        assert_eq!(ids, ["TXN-001", "TXN-003", "TXN-002"]);
    }

    #[test]
    fn test_case_insensitive_string_sort() {
        let mut records = payments();
        SortSpec::asc("customer").apply(&mut records);
        let names: Vec<_> = records.iter().map(|p| p.customer.as_str()).collect();
        assert_eq!(names, ["mike", "Sarah", "Zoe"]);
    }

    #[test]
    fn test_dates_sort_as_dates_not_strings() {
        let mut records = payments();
        SortSpec::asc("date").apply(&mut records);
        let ids: Vec<_> = records.iter().map(|p| p.transaction_id.as_str()).collect();
        // Lexicographic ordering would put 2024-10-1 before 2024-2-1
        assert_eq!(ids, ["TXN-002", "TXN-001", "TXN-003"]);
    }
}
