//! Export serialization
//!
//! Turns the currently *filtered* (never paginated) record set into a flat
//! tabular text blob: header row plus one row per record, with a fixed
//! per-entity column order. Cells are properly quoted — a customer name
//! containing a comma must not shift columns.

use crate::core::record::Record;
use chrono::NaiveDate;

const DELIMITER: char = ',';

/// Serialize the filtered records as delimiter-joined text.
///
/// Nested sub-objects are flattened to one column each by the entity's
/// [`Record::export_row`]; missing optional relations arrive here already
/// rendered as the fixed placeholder, never as an empty cell.
pub fn to_delimited<R: Record>(records: &[R]) -> String {
    let mut out = String::new();
    push_row(
        &mut out,
        R::export_columns().iter().map(|c| c.to_string()),
    );
    for record in records {
        push_row(&mut out, record.export_row().into_iter());
    }
    out
}

/// Download file name convention: `<entity>_export_<ISO-date>.txt`
pub fn export_filename(entity: &str, date: NaiveDate) -> String {
    format!("{}_export_{}.txt", entity, date.format("%Y-%m-%d"))
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(DELIMITER);
        }
        first = false;
        out.push_str(&escape_cell(&cell));
    }
    out.push('\n');
}

/// Quote a cell when it contains the delimiter, a quote, or a newline;
/// embedded quotes are doubled
fn escape_cell(cell: &str) -> String {
    if cell.contains(DELIMITER) || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
