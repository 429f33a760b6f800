//! Page window math for paginated listings.
//!
//! Listings are page-based: the caller asks for a `page` (1-indexed) and a
//! `pageSize`, and the server answers with the slice of items for that page
//! plus enough metadata to render pager controls.
//!
//! Invalid input is never rejected. It is normalized instead:
//!
//! - `pageSize` outside [`ALLOWED_PAGE_SIZES`] (including zero, negatives,
//!   missing or unparseable values) becomes [`DEFAULT_PAGE_SIZE`]
//! - `page` below 1 becomes 1
//! - `page` beyond the last page becomes the last page
//!
//! There is always at least one page, even when the listing is empty.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::pagination::PageWindow;
//!
//! // 7 items, 3 per page, page 3 holds the 7th item only
//! let window = PageWindow::new(Some(3), Some(3), 7);
//! assert_eq!(window.total_pages, 3);
//! assert_eq!(window.offset(), 6);
//! assert_eq!(window.start_item(), 7);
//! assert_eq!(window.end_item(), 7);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::serde::{deserialize_lenient_i64, parse_lenient_i64};

/// Page sizes a client may request.
pub const ALLOWED_PAGE_SIZES: [i64; 4] = [2, 3, 5, 10];

/// Page size used when the requested one is not allowed.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// Query parameters for a paginated listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page: Option<i64>,
    /// Items per page, one of 2, 3, 5 or 10 (default: 3)
    #[serde(
        default,
        rename = "pageSize",
        alias = "page_size",
        deserialize_with = "deserialize_lenient_i64"
    )]
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Builds a query from raw key/value pairs.
    ///
    /// Repeated keys, and `pageSize` sent alongside `page_size`, keep the
    /// first value that parses. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "pageSize" | "page_size" => &mut query.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = parse_lenient_i64(value.as_ref());
            }
        }
        query
    }

    /// Resolves the query against a total item count.
    #[must_use]
    pub fn window(&self, total_items: i64) -> PageWindow {
        PageWindow::new(self.page, self.page_size, total_items)
    }
}

/// A normalized page over a listing of `total_items` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageWindow {
    /// Current page, always within `1..=total_pages`
    pub page: i64,
    /// Effective page size, always one of [`ALLOWED_PAGE_SIZES`]
    pub page_size: i64,
    /// Number of items across all pages
    pub total_items: i64,
    /// Number of pages, never less than 1
    pub total_pages: i64,
}

impl PageWindow {
    #[must_use]
    pub fn new(page: Option<i64>, page_size: Option<i64>, total_items: i64) -> Self {
        let page_size = normalize_page_size(page_size);
        let total_items = total_items.max(0);
        let total_pages = ((total_items + page_size - 1) / page_size).max(1);
        let page = page.unwrap_or(1).max(1).min(total_pages);

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Number of items to skip before this page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Maximum number of items on this page.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// 1-based position of the first item on this page, or 0 when empty.
    #[must_use]
    pub fn start_item(&self) -> i64 {
        if self.total_items == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based position of the last item on this page, or 0 when empty.
    #[must_use]
    pub fn end_item(&self) -> i64 {
        if self.total_items == 0 {
            0
        } else {
            (self.page * self.page_size).min(self.total_items)
        }
    }

    /// Items after this page.
    #[must_use]
    pub fn remaining_items(&self) -> i64 {
        (self.total_items - self.end_item()).max(0)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn normalize_page_size(requested: Option<i64>) -> i64 {
    match requested {
        Some(size) if ALLOWED_PAGE_SIZES.contains(&size) => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}
