//! Page request and page envelope primitives for content admin list
//! endpoints.
//!
//! The content API paginates with 1-based page numbers and a page size, and
//! answers with an envelope echoing both alongside the total record count.
//! This crate owns that contract so every list operation renders the same
//! query string and applies the same page arithmetic.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 20).expect("valid request");
//! assert_eq!(request.to_query_string(), "page=2&pageSize=20");
//!
//! let page: Page<u32> = Page::new(vec![1, 2, 3], 43, 2, 20);
//! assert_eq!(page.total_pages(), 3);
//! assert_eq!(page.next_page(), 3);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

/// Page number used when callers do not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when callers do not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Validation failures for [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers start at one.
    #[error("page must be at least 1, got {page}")]
    PageOutOfRange {
        /// Rejected page number.
        page: u32,
    },
    /// Page size must select at least one record.
    #[error("page size must be at least 1, got {page_size}")]
    PageSizeOutOfRange {
        /// Rejected page size.
        page_size: u32,
    },
}

/// One-based page selection sent to list endpoints.
///
/// ## Invariants
/// - `page >= 1`
/// - `page_size >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Validate and construct a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when either value is zero.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageOutOfRange { page });
        }
        if page_size == 0 {
            return Err(PageRequestError::PageSizeOutOfRange { page_size });
        }
        Ok(Self { page, page_size })
    }

    /// Requested page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Render the `page=&pageSize=` query string understood by the API.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .append_pair("pageSize", &self.page_size.to_string())
            .finish()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// List envelope returned by paginated endpoints.
///
/// Serialised as `{ "data": [...], "total": n, "page": n, "pageSize": n }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page.
    pub data: Vec<T>,
    /// Total number of records across all pages.
    pub total: u64,
    /// Page number echoed by the server.
    pub page: u32,
    /// Page size echoed by the server.
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Build an envelope from its parts.
    #[must_use]
    pub const fn new(data: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            data,
            total,
            page,
            page_size,
        }
    }

    /// Number of pages needed to show `total` records, never less than one.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        self.total.div_ceil(u64::from(self.page_size)).max(1)
    }

    /// Whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Following page number, clamped to the last page.
    #[must_use]
    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1).clamp(1, self.last_page())
    }

    /// Preceding page number, clamped to the first page.
    #[must_use]
    pub fn previous_page(&self) -> u32 {
        self.page.saturating_sub(1).clamp(1, self.last_page())
    }

    fn last_page(&self) -> u32 {
        u32::try_from(self.total_pages()).unwrap_or(u32::MAX)
    }
}
