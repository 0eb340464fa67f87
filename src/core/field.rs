//! Field value types and query-oriented comparison

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A polymorphic field value that can hold different types
///
/// Every record exposes its fields as `FieldValue`s so the query engine can
/// filter, sort, and aggregate without knowing the concrete entity shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, converting integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a calendar date.
    ///
    /// ISO-8601 strings are parsed rather than compared lexicographically,
    /// so `2024-2-1` and `2024-10-1` order correctly.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render the value as display text (used by text search and export)
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Date(d) => d.to_string(),
            FieldValue::Null => String::new(),
        }
    }

    /// Case-insensitive substring test against an already-lowercased needle
    pub fn contains_ci(&self, lowered_needle: &str) -> bool {
        self.to_text().to_lowercase().contains(lowered_needle)
    }

    /// Total ordering used by sorting and range predicates.
    ///
    /// Numbers compare numerically, dates (including ISO date strings)
    /// compare as calendar dates, strings compare case-folded. Null orders
    /// before everything so records missing a field group at the start.
    pub fn query_cmp(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Boolean(a), Boolean(b)) => a.cmp(b),
            _ => {
                if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
                    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
                } else if let (Some(a), Some(b)) = (self.as_date(), other.as_date()) {
                    a.cmp(&b)
                } else {
                    self.to_text()
                        .to_lowercase()
                        .cmp(&other.to_text().to_lowercase())
                }
            }
        }
    }

    /// Convert from a JSON value (the wire form of filter parameters)
    pub fn from_json(value: &serde_json::Value) -> FieldValue {
        match value {
            serde_json::Value::String(s) => FieldValue::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::Bool(b) => FieldValue::Boolean(*b),
            _ => FieldValue::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_str(), Some("test"));
        assert_eq!(value.as_f64(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numeric_widening() {
        assert_eq!(FieldValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Float(1.5).as_f64(), Some(1.5));
    }

    #[test]
    fn test_numeric_cmp_across_variants() {
        let a = FieldValue::Integer(2);
        let b = FieldValue::Float(10.0);
        assert_eq!(a.query_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_string_cmp_is_case_insensitive() {
        let a = FieldValue::from("alice");
        let b = FieldValue::from("Bob");
        assert_eq!(a.query_cmp(&b), Ordering::Less);
        assert_eq!(
            FieldValue::from("ALICE").query_cmp(&FieldValue::from("alice")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_iso_date_strings_compare_as_dates() {
        // Lexicographic comparison would invert these
        let feb = FieldValue::from("2024-2-1");
        let oct = FieldValue::from("2024-10-1");
        assert_eq!(feb.query_cmp(&oct), Ordering::Less);
    }

    #[test]
    fn test_null_orders_first() {
        assert_eq!(
            FieldValue::Null.query_cmp(&FieldValue::from("a")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::from(0i64).query_cmp(&FieldValue::Null),
            Ordering::Greater
        );
    }

    #[test]
    fn test_contains_ci() {
        let value = FieldValue::from("Sarah Johnson");
        assert!(value.contains_ci("johnson"));
        assert!(value.contains_ci("sar"));
        assert!(!value.contains_ci("smith"));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            FieldValue::from_json(&serde_json::json!("completed")),
            FieldValue::from("completed")
        );
        assert_eq!(
            FieldValue::from_json(&serde_json::json!(50)),
            FieldValue::Integer(50)
        );
        assert_eq!(
            FieldValue::from_json(&serde_json::json!(49.99)),
            FieldValue::Float(49.99)
        );
        assert_eq!(FieldValue::from_json(&serde_json::Value::Null), FieldValue::Null);
    }
}
