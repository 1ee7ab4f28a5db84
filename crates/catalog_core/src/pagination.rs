//! Page arithmetic for paged catalog listings.
//!
//! Everything here is a pure function of the raw page parameter and the
//! result count reported by the last successful fetch.

use std::fmt;

/// Items per page served by the upstream API.
pub const PAGE_SIZE: u32 = 20;
/// Number of page links shown at once.
pub const WINDOW_SIZE: u32 = 5;
/// The upstream API refuses to serve pages beyond this one.
pub const MAX_PAGES: u32 = 500;

/// Derives the current page from the raw `page` parameter.
///
/// Absent, unparsable and non-positive values all map to page 1. There is no
/// upper clamp: an out-of-range page passes through to the fetch layer.
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map(|page| u32::try_from(page).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Number of pages for `total_results`, capped at [`MAX_PAGES`].
pub fn total_pages(total_results: u64) -> u32 {
    let pages = total_results.div_ceil(u64::from(PAGE_SIZE));
    pages.min(u64::from(MAX_PAGES)) as u32
}

/// The contiguous run of page numbers to show as links.
///
/// The window is centered on `current` and then shifted back from the end so
/// it always holds [`WINDOW_SIZE`] pages unless there are fewer pages overall.
pub fn visible_pages(current: u32, total: u32) -> Vec<u32> {
    let half = WINDOW_SIZE / 2;
    let start = current.saturating_sub(half).max(1);
    let end = total.min(start.saturating_add(WINDOW_SIZE - 1));
    if end == 0 {
        return Vec::new();
    }
    let start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    (start..=end).collect()
}

/// `"3 of 5"`; an empty catalog still reads `"1 of 1"`.
pub fn page_count_label(current: u32, total_pages: u32) -> String {
    if total_pages == 0 {
        "1 of 1".to_string()
    } else {
        format!("{current} of {total_pages}")
    }
}

/// Visible page links plus the boundary affordances around them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub total_pages: u32,
}

impl PageWindow {
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            pages: visible_pages(current, total_pages),
            total_pages,
        }
    }

    fn first_visible(&self) -> Option<u32> {
        self.pages.first().copied()
    }

    fn last_visible(&self) -> Option<u32> {
        self.pages.last().copied()
    }

    /// A separate "page 1" link precedes the window.
    pub fn show_first(&self) -> bool {
        self.first_visible().is_some_and(|first| first > 1)
    }

    /// An ellipsis sits between the "page 1" link and the window.
    pub fn show_leading_ellipsis(&self) -> bool {
        self.first_visible().is_some_and(|first| first > 2)
    }

    /// A separate "last page" link follows the window.
    pub fn show_last(&self) -> bool {
        self.last_visible()
            .is_some_and(|last| last < self.total_pages)
    }

    /// An ellipsis sits between the window and the "last page" link.
    pub fn show_trailing_ellipsis(&self) -> bool {
        self.last_visible()
            .is_some_and(|last| last < self.total_pages.saturating_sub(1))
    }
}

/// The inclusive 1-based item range shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeLabel {
    NoResults,
    Range { start: u64, end: u64, total: u64 },
}

impl RangeLabel {
    pub fn compute(current_page: u32, total_results: u64) -> Self {
        let page_size = u64::from(PAGE_SIZE);
        let current = u64::from(current_page.max(1));
        let start = (current - 1) * page_size + 1;
        let end = (current * page_size).min(total_results);
        if total_results == 0 || start > end {
            return RangeLabel::NoResults;
        }
        RangeLabel::Range {
            start,
            end,
            total: total_results,
        }
    }
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeLabel::NoResults => write!(f, "no results"),
            RangeLabel::Range { start, end, total } => write!(f, "{start}-{end} of {total}"),
        }
    }
}
