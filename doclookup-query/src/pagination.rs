//! Page-based pagination.
//!
//! Pages are 1-indexed. A [`PageRequest`] converts to skip/take values for
//! the store, and [`PageRange`] computes the rows a page covers once the
//! total is known.
//!
//! ```rust
//! use doclookup_query::{PageRange, PageRequest};
//!
//! let request = PageRequest::new(3, 25);
//! assert_eq!(request.skip(), 50);
//! assert_eq!(request.take(), 25);
//!
//! let range = PageRange::compute(3, 25, 57).unwrap();
//! assert_eq!((range.start, range.end, range.total), (53, 57, 57));
//! assert!(!range.has_next);
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: u64 = 25;
/// Largest page size the list endpoint serves.
pub const MAX_PAGE_SIZE: u64 = 200;

/// A request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    /// Rows per page.
    pub page_size: u64,
    /// Whether the caller wants the total row count.
    pub include_total: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            include_total: false,
        }
    }
}

impl PageRequest {
    /// Create a page request, clamping out-of-range values.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            include_total: false,
        }
    }

    /// Build a page request from raw query parameters.
    ///
    /// Unparseable numbers fall back to the defaults; `includeTotal` accepts
    /// `true` or `1`.
    pub fn from_params(
        page: Option<&str>,
        page_size: Option<&str>,
        include_total: Option<&str>,
    ) -> Self {
        let page = parse_number(page).unwrap_or(1);
        let page_size = parse_number(page_size).unwrap_or(DEFAULT_PAGE_SIZE);

        Self::new(page, page_size).with_total(parse_flag(include_total))
    }

    /// Request (or not) the total row count.
    pub fn with_total(mut self, include_total: bool) -> Self {
        self.include_total = include_total;
        self
    }

    /// Number of rows to skip, capped at the largest offset the driver accepts.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// Maximum number of rows to return.
    pub fn take(&self) -> u64 {
        self.page_size
    }
}

fn parse_number(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1")
    )
}

/// Whether rows exist past the given page.
pub fn has_more(page: u64, page_size: u64, total: u64) -> bool {
    page.saturating_mul(page_size) < total
}

/// The 1-based row range covered by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// First row on the page.
    pub start: u64,
    /// Last row on the page.
    pub end: u64,
    /// Total number of rows.
    pub total: u64,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageRange {
    /// Compute the range for a page, or `None` when the page holds no rows.
    pub fn compute(page: u64, page_size: u64, total: u64) -> Option<Self> {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(page_size).saturating_add(1);
        let end = page.saturating_mul(page_size).min(total);

        if start > end {
            return None;
        }

        Some(Self {
            start,
            end,
            total,
            has_next: has_more(page, page_size, total),
        })
    }
}
