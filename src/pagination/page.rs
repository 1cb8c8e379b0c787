//! Page-number pagination.

use crate::config::PaginationConfig;
use serde::Serialize;
use thiserror::Error;

/// Errors returned for unusable page requests.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// Page numbers start at 1.
    #[error("invalid page {0}: page numbers start at 1")]
    InvalidPage(usize),
    /// The requested page lies past the last page.
    #[error("invalid page {page}: only {total_pages} page(s) available")]
    PageOutOfRange {
        /// Requested page number.
        page: usize,
        /// Number of available pages.
        total_pages: usize,
    },
    /// Page sizes must be positive.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidPage`] when `page` is zero and
    /// [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage(page));
        }
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// Builds a request from optional caller input, applying the configured
    /// default size and clamping to the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] for a zero page number or page size.
    pub fn from_query(
        page: Option<usize>,
        page_size: Option<usize>,
        config: &PaginationConfig,
    ) -> Result<Self, PaginationError> {
        let size = page_size
            .unwrap_or(config.default_page_size)
            .min(config.max_page_size);
        Self::new(page.unwrap_or(1), size)
    }

    /// Returns the first page with the given size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub const fn first(page_size: usize) -> Result<Self, PaginationError> {
        Self::new(1, page_size)
    }

    /// Returns the one-based page number.
    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(self) -> usize {
        self.page_size
    }
}

/// One page of results with navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// One-based page number.
    pub current_page: usize,
    /// Number of pages; an empty result still has one page.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_count: usize,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_previous: bool,
    /// Page size used to slice the results.
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Slices an already ordered result set into the requested page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when the requested page is
    /// past the last page.
    pub fn from_items(items: Vec<T>, request: PageRequest) -> Result<Self, PaginationError> {
        let total_count = items.len();
        let total_pages = total_count.div_ceil(request.page_size).max(1);
        if request.page > total_pages {
            return Err(PaginationError::PageOutOfRange {
                page: request.page,
                total_pages,
            });
        }

        let offset = (request.page - 1).saturating_mul(request.page_size);
        let page_items = items
            .into_iter()
            .skip(offset)
            .take(request.page_size)
            .collect();

        Ok(Self {
            items: page_items,
            current_page: request.page,
            total_pages,
            total_count,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
            page_size: request.page_size,
        })
    }
}
