//! Pagination windowing
//!
//! Clamped page slicing plus the compact page-number window rendered as
//! navigation buttons. Everything here is a pure function of its inputs.

use serde::{Serialize, Serializer};

/// Requested page size and number (page 1 is first)
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub size: usize,
    pub number: usize,
}

impl PageRequest {
    /// Create a request, forcing the size to at least 1
    pub fn new(size: usize, number: usize) -> Self {
        PageRequest {
            size: size.max(1),
            number,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest { size: 8, number: 1 }
    }
}

/// `max(1, ceil(count / size))` — an empty collection still has one page,
/// keeping the clamp range `[1, total_pages]` well-defined
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
/// Out-of-range requests never error and never land on an empty page
/// while records exist.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages)
}

/// Slice bounds for an already-clamped page
pub fn slice_bounds(filtered_count: usize, page_size: usize, clamped_page: usize) -> (usize, usize) {
    let start = (clamped_page - 1) * page_size;
    let end = (start + page_size).min(filtered_count);
    (start.min(end), end)
}

/// One element of the page-number window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Compute the compact page-number window for navigation controls.
///
/// Shows all pages when `total <= 5`; otherwise a 5-wide window centered on
/// the current page and clamped so it never runs off either end. When the
/// window stops short of the last page, a jump-to-last control is appended,
/// preceded by a truncation marker when the gap is wider than one page.
///
/// Pure function of `(current, total)` — same inputs, same window,
/// independent of call history.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    let total = total.max(1);
    let current = clamp_page(current, total);

    if total <= 5 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let start = if current <= 3 {
        1
    } else if current >= total - 2 {
        total - 4
    } else {
        current - 2
    };
    let end = start + 4;

    let mut window: Vec<PageItem> = (start..=end).map(PageItem::Page).collect();
    if end < total {
        if end < total - 1 {
            window.push(PageItem::Ellipsis);
        }
        window.push(PageItem::Page(total));
    }
    window
}
