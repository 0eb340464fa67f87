//! Query evaluation
//!
//! One pure, synchronous pipeline used identically by every entity list:
//! filter, stable sort, clamp and slice the page, compute the page-number
//! window, aggregate the filtered subset. The input collection is read-only
//! for the duration of a query, every evaluation is independent, and the
//! whole pipeline runs to completion with no I/O inside.

use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use crate::query::page::{self, PageItem, PageRequest};
use crate::query::sort::SortSpec;
use indexmap::IndexMap;
use serde::Serialize;

/// An immutable query value: one UI interaction produces one `Query`.
///
/// Filter, sort, and page state are recomputed per interaction rather than
/// mutated in place, which keeps evaluation trivially testable.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filters: FilterSpec,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
    /// Aggregated over the *filtered subset*. Headline KPIs over the full
    /// collection call [`AggregateSpec::compute`] directly instead.
    pub aggregates: AggregateSpec,
}

/// The result of one query evaluation
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutput<R> {
    /// The clamped current page's records, filtered and sorted
    pub visible: Vec<R>,
    /// Size of the filtered subset before pagination
    pub total_filtered: usize,
    pub total_pages: usize,
    /// The page actually served after clamping
    pub page: usize,
    /// Stats over the filtered subset, in declaration order
    pub stats: IndexMap<String, f64>,
    pub page_window: Vec<PageItem>,
}

/// Evaluate a query against a record collection.
///
/// With an empty filter the visible set is the whole collection, re-sorted
/// only. Concatenating every page in order reconstructs the filtered and
/// sorted sequence exactly once each.
pub fn evaluate<R: Record>(records: &[R], query: &Query) -> QueryOutput<R> {
    let mut filtered: Vec<R> = records
        .iter()
        .filter(|r| query.filters.matches(*r))
        .cloned()
        .collect();

    if let Some(sort) = &query.sort {
        sort.apply(&mut filtered);
    }

    let total_filtered = filtered.len();
    let total_pages = page::total_pages(total_filtered, query.page.size);
    let current = page::clamp_page(query.page.number, total_pages);
    let (start, end) = page::slice_bounds(total_filtered, query.page.size, current);

    let stats = query.aggregates.compute(&filtered);
    let page_window = page::page_window(current, total_pages);
    let visible = filtered[start..end].to_vec();

    QueryOutput {
        visible,
        total_filtered,
        total_pages,
        page: current,
        stats,
        page_window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Booking;

    fn bookings() -> Vec<Booking> {
        let mut list = Vec::new();
        for i in 1..=10 {
            let status = match i {
                1 | 4 | 7 | 9 => "completed",
                2 | 5 => "pending",
                3 | 8 => "in-progress",
                _ => "cancelled",
            };
            let amount = match i {
                1 => 100.0,
                4 => 50.0,
                7 | 9 => 25.0,
                _ => 40.0,
            };
            list.push(Booking::sample(
                &format!("BK-{i:03}"),
                "Sarah Johnson",
                "Electrician",
                Some("Alex Martinez"),
                "2024-01-15",
                amount,
                status,
            ));
        }
        list
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let records = bookings();
        let query = Query {
            page: PageRequest::new(100, 1),
            ..Default::default()
        };
        let out = evaluate(&records, &query);
        assert_eq!(out.total_filtered, 10);
        assert_eq!(out.visible.len(), 10);
    }

    #[test]
    fn test_completed_subset_keeps_input_order() {
        // 4 completed bookings with amounts [100, 50, 25, 25]
        let records = bookings();
        let query = Query {
            filters: FilterSpec::new().equals("status", "completed"),
            page: PageRequest::new(100, 1),
            aggregates: AggregateSpec::new()
                .sum("revenue", "amount")
                .average("avg", "amount"),
            ..Default::default()
        };
        let out = evaluate(&records, &query);
        assert_eq!(out.total_filtered, 4);
        let ids: Vec<_> = out.visible.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["BK-001", "BK-004", "BK-007", "BK-009"]);
        assert_eq!(out.stats["revenue"], 200.0);
        assert_eq!(out.stats["avg"], 50.0);
    }

    #[test]
    fn test_idempotent() {
        let records = bookings();
        let query = Query {
            filters: FilterSpec::new().equals("status", "pending"),
            sort: Some(SortSpec::desc("amount")),
            page: PageRequest::new(8, 1),
            ..Default::default()
        };
        let first = evaluate(&records, &query);
        let second = evaluate(&records, &query);
        let a: Vec<_> = first.visible.iter().map(|b| b.id.clone()).collect();
        let b: Vec<_> = second.visible.iter().map(|b| b.id.clone()).collect();
        assert_eq!(a, b);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_page_clamping() {
        let records = bookings();
        let query = Query {
            page: PageRequest::new(8, 99),
            ..Default::default()
        };
        let out = evaluate(&records, &query);
        assert_eq!(out.total_pages, 2);
        assert_eq!(out.page, 2);
        assert_eq!(out.visible.len(), 2);

        let query = Query {
            page: PageRequest::new(8, 0),
            ..Default::default()
        };
        let out = evaluate(&records, &query);
        assert_eq!(out.page, 1);
        assert_eq!(out.visible.len(), 8);
    }

    #[test]
    fn test_pages_partition_the_filtered_sequence() {
        let records = bookings();
        let mut seen: Vec<String> = Vec::new();
        for number in 1..=4 {
            let query = Query {
                sort: Some(SortSpec::asc("amount")),
                page: PageRequest::new(3, number),
                ..Default::default()
            };
            let out = evaluate(&records, &query);
            seen.extend(out.visible.iter().map(|b| b.id.clone()));
        }
        assert_eq!(seen.len(), 10);
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 10);
    }
}
