//! The record query engine
//!
//! Every entity list page runs the same pipeline: predicate filtering,
//! stable sorting, clamped pagination with a compact page-number window,
//! aggregate statistics, and export serialization. The engine is defined
//! once against the [`crate::core::Record`] field-access contract; each
//! entity supplies only its field list and export column order.

pub mod aggregate;
pub mod engine;
pub mod export;
pub mod filter;
pub mod page;
pub mod sort;

pub use aggregate::{Aggregate, AggregateSpec, Reducer};
pub use engine::{Query, QueryOutput, evaluate};
pub use export::{export_filename, to_delimited};
pub use filter::{ALL, FilterSpec, Predicate};
pub use page::{PageItem, PageRequest, page_window};
pub use sort::{Direction, SortSpec};
