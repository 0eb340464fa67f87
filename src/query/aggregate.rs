//! Aggregate statistics
//!
//! Named reducers computed over a record collection. Callers are explicit
//! about whether they aggregate the full collection (headline KPIs) or the
//! filtered subset (results banners) — the two diverge as soon as any
//! filter is active, so the choice lives at the call site, never in here.
//!
//! Every aggregate is re-derived from the collection it is handed; there
//! are no running counters that can drift from the source data.

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::filter::FilterSpec;
use indexmap::IndexMap;

/// How a single statistic is reduced from the (guarded) records
#[derive(Debug, Clone)]
pub enum Reducer {
    /// Number of records
    Count,
    /// Sum of a numeric field (non-numeric and absent values contribute 0)
    Sum(String),
    /// Mean of a numeric field; zero records yield 0, never NaN
    Average(String),
    /// Share of guarded records among all records handed in, 0-100.
    /// Full precision is kept; rounding is a presentation concern.
    PercentOfTotal,
}

/// A named statistic: a reducer plus an optional guard filter
/// (e.g. "sum of amount where status = completed")
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub name: String,
    pub reducer: Reducer,
    pub guard: Option<FilterSpec>,
}

/// An ordered set of named reducers. Output order is declaration order.
#[derive(Debug, Clone, Default)]
pub struct AggregateSpec {
    aggregates: Vec<Aggregate>,
}

impl AggregateSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn count(self, name: &str) -> Self {
        self.add(name, Reducer::Count, None)
    }

    pub fn count_where(self, name: &str, guard: FilterSpec) -> Self {
        self.add(name, Reducer::Count, Some(guard))
    }

    pub fn sum(self, name: &str, field: &str) -> Self {
        self.add(name, Reducer::Sum(field.to_string()), None)
    }

    pub fn sum_where(self, name: &str, field: &str, guard: FilterSpec) -> Self {
        self.add(name, Reducer::Sum(field.to_string()), Some(guard))
    }

    pub fn average(self, name: &str, field: &str) -> Self {
        self.add(name, Reducer::Average(field.to_string()), None)
    }

    pub fn average_where(self, name: &str, field: &str, guard: FilterSpec) -> Self {
        self.add(name, Reducer::Average(field.to_string()), Some(guard))
    }

    pub fn percent_of_total(self, name: &str, guard: FilterSpec) -> Self {
        self.add(name, Reducer::PercentOfTotal, Some(guard))
    }

    fn add(mut self, name: &str, reducer: Reducer, guard: Option<FilterSpec>) -> Self {
        self.aggregates.push(Aggregate {
            name: name.to_string(),
            reducer,
            guard,
        });
        self
    }

    /// Compute every statistic over the given records
    pub fn compute<R: Record>(&self, records: &[R]) -> IndexMap<String, f64> {
        let mut stats = IndexMap::with_capacity(self.aggregates.len());
        for aggregate in &self.aggregates {
            let guarded: Vec<&R> = match &aggregate.guard {
                Some(guard) => records.iter().filter(|r| guard.matches(*r)).collect(),
                None => records.iter().collect(),
            };
            let value = match &aggregate.reducer {
                Reducer::Count => guarded.len() as f64,
                Reducer::Sum(field) => sum_field(&guarded, field),
                Reducer::Average(field) => {
                    if guarded.is_empty() {
                        0.0
                    } else {
                        sum_field(&guarded, field) / guarded.len() as f64
                    }
                }
                Reducer::PercentOfTotal => {
                    if records.is_empty() {
                        0.0
                    } else {
                        100.0 * guarded.len() as f64 / records.len() as f64
                    }
                }
            };
            stats.insert(aggregate.name.clone(), value);
        }
        stats
    }
}

fn sum_field<R: Record>(records: &[&R], field: &str) -> f64 {
    records
        .iter()
        .filter_map(|r| r.field_value(field).as_ref().and_then(FieldValue::as_f64))
        .sum()
}
