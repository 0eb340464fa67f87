//! Predicate composition
//!
//! A [`FilterSpec`] is an ordered set of typed predicates combined with
//! short-circuiting AND. Predicates have no side effects, and a predicate
//! referencing an unknown or absent field is a non-match rather than an
//! error, so a single bad filter can never crash a list page.

use crate::core::field::FieldValue;
use crate::core::record::Record;
use serde_json::Value;
use std::cmp::Ordering;

/// Sentinel option value meaning "no constraint" on an equality predicate.
///
/// Every call site must use this exact literal; any other sentinel is a
/// defect.
pub const ALL: &str = "all";

/// A single testable constraint evaluated per record
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Case-insensitive substring match, OR-combined across `fields`.
    /// An empty query always passes.
    Text { query: String, fields: Vec<String> },

    /// Field equals the selected option. The literal [`ALL`] always passes.
    /// String comparison is case-insensitive.
    Equals { field: String, value: FieldValue },

    /// Field falls within the inclusive `[from, to]` bound; an absent bound
    /// is unbounded on that side.
    ///
    /// When both bounds are present and `from > to` the range is empty and
    /// nothing matches. Swapping the bounds instead would silently hide a
    /// user error, so the inverted range deliberately matches no records.
    Range {
        field: String,
        from: Option<FieldValue>,
        to: Option<FieldValue>,
    },
}

impl Predicate {
    /// Evaluate this predicate against a single record
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            Predicate::Text { query, fields } => {
                let needle = query.trim().to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                fields.iter().any(|field| {
                    record
                        .field_value(field)
                        .is_some_and(|v| v.contains_ci(&needle))
                })
            }
            Predicate::Equals { field, value } => {
                if value.as_str() == Some(ALL) {
                    return true;
                }
                match record.field_value(field) {
                    Some(actual) if !actual.is_null() => {
                        actual.query_cmp(value) == Ordering::Equal
                    }
                    _ => false,
                }
            }
            Predicate::Range { field, from, to } => {
                if let (Some(lo), Some(hi)) = (from, to)
                    && lo.query_cmp(hi) == Ordering::Greater
                {
                    return false;
                }
                let Some(actual) = record.field_value(field) else {
                    return false;
                };
                if actual.is_null() {
                    return false;
                }
                let above = from
                    .as_ref()
                    .is_none_or(|lo| actual.query_cmp(lo) != Ordering::Less);
                let below = to
                    .as_ref()
                    .is_none_or(|hi| actual.query_cmp(hi) != Ordering::Greater);
                above && below
            }
        }
    }
}

/// The set of currently active search/filter constraints.
///
/// Built fresh per interaction; the empty spec accepts every record.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    predicates: Vec<Predicate>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Free-text search over the given fields
    pub fn text(mut self, query: &str, fields: &[&str]) -> Self {
        self.predicates.push(Predicate::Text {
            query: query.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        });
        self
    }

    /// Field equals value ([`ALL`] means unconstrained)
    pub fn equals(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.predicates.push(Predicate::Equals {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    /// Field within the inclusive `[from, to]` bound
    pub fn range(
        mut self,
        field: &str,
        from: Option<FieldValue>,
        to: Option<FieldValue>,
    ) -> Self {
        self.predicates.push(Predicate::Range {
            field: field.to_string(),
            from,
            to,
        });
        self
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Evaluate all predicates against a record, short-circuiting AND
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Parse the wire form of a filter.
    ///
    /// `q` is the free-text search term applied over `searchable`. `filter`
    /// is a JSON object where `"field": value` is an equality constraint and
    /// the suffixed keys `"field>="` / `"field<="` contribute range bounds
    /// (bounds for the same field merge into one range predicate).
    pub fn from_params(q: Option<&str>, filter: Option<&Value>, searchable: &[&str]) -> Self {
        let mut spec = FilterSpec::new();
        if let Some(query) = q {
            spec = spec.text(query, searchable);
        }
        let Some(Value::Object(map)) = filter else {
            return spec;
        };
        let mut ranges: Vec<(String, Option<FieldValue>, Option<FieldValue>)> = Vec::new();
        for (key, value) in map {
            if let Some(field) = key.strip_suffix(">=") {
                let bound = FieldValue::from_json(value);
                match ranges.iter_mut().find(|(f, _, _)| f == field) {
                    Some((_, from, _)) => *from = Some(bound),
                    None => ranges.push((field.to_string(), Some(bound), None)),
                }
            } else if let Some(field) = key.strip_suffix("<=") {
                let bound = FieldValue::from_json(value);
                match ranges.iter_mut().find(|(f, _, _)| f == field) {
                    Some((_, _, to)) => *to = Some(bound),
                    None => ranges.push((field.to_string(), None, Some(bound))),
                }
            } else {
                spec.push(Predicate::Equals {
                    field: key.clone(),
                    value: FieldValue::from_json(value),
                });
            }
        }
        for (field, from, to) in ranges {
            spec.push(Predicate::Range { field, from, to });
        }
        spec
    }
}
