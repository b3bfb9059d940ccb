//! Pagination state for grid views
//!
//! Pages are 1-indexed. The current page is clamped into range on every
//! change to the page size or the total record count, so a shrinking record
//! set never leaves the grid on an empty page.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::RangeError;

/// Snapshot of the pagination state for the host's page controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page number (1-indexed)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Number of records in the (filtered) set
    pub total_count: usize,
}

#[derive(Debug, Clone)]
pub struct PaginationController {
    current_page: usize,
    page_size: usize,
    total_count: usize,
}

impl PaginationController {
    pub fn new(page_size: usize) -> Result<Self, RangeError> {
        if page_size == 0 {
            return Err(RangeError::ZeroPageSize);
        }
        Ok(Self {
            current_page: 1,
            page_size,
            total_count: 0,
        })
    }

    pub fn state(&self) -> PageState {
        PageState {
            page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages(),
            total_count: self.total_count,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// `ceil(total / page_size)`, never less than 1
    pub fn total_pages(&self) -> usize {
        // saturating_add keeps the ceiling division from overflowing on huge totals
        let pages = self.total_count.saturating_add(self.page_size - 1) / self.page_size;
        pages.max(1)
    }

    /// Update the record count after the upstream set changed
    pub fn set_total(&mut self, total_count: usize) {
        self.total_count = total_count;
        self.clamp();
    }

    /// Change the page size, keeping the current page in range
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), RangeError> {
        if page_size == 0 {
            return Err(RangeError::ZeroPageSize);
        }
        if self.page_size != page_size {
            self.page_size = page_size;
            self.clamp();
            tracing::debug!(page_size, page = self.current_page, "page size changed");
        }
        Ok(())
    }

    /// Navigate to a page, clamped into `[1, total_pages]`. Returns the page
    /// actually shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        let new_page = page.clamp(1, self.total_pages());
        if self.current_page != new_page {
            self.current_page = new_page;
            tracing::debug!(page = new_page, "page changed");
        }
        new_page
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> usize {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.set_page(self.total_pages())
    }

    /// Index of the first record on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.page_size)
    }

    /// Index range of the current page within the sorted set
    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_count);
        let end = start.saturating_add(self.page_size).min(self.total_count);
        start..end
    }

    /// 1-based first and last record numbers shown ("11–20 of 23"), or `None`
    /// when there is nothing to show
    pub fn display_range(&self) -> Option<(usize, usize)> {
        let range = self.range();
        if range.is_empty() {
            None
        } else {
            Some((range.start + 1, range.end))
        }
    }

    /// The current page's slice of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    fn clamp(&mut self) {
        let max_page = self.total_pages();
        if self.current_page > max_page {
            tracing::debug!(
                from = self.current_page,
                to = max_page,
                "clamping page after record set change"
            );
            self.current_page = max_page;
        }
        if self.total_count == 0 {
            self.current_page = 1;
        }
    }
}
