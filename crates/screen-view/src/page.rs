//! Pagination over the filtered rows.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Requested page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the page size and goes back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Slices one page out of `rows`, clamping the page into range.
    pub fn slice<'r, T>(&self, rows: &'r [T]) -> (PageInfo, &'r [T]) {
        let total_rows = rows.len();
        let total_pages = total_rows.div_ceil(self.page_size).max(1);
        let page = self.page.clamp(1, total_pages);
        let start = ((page - 1) * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        let info = PageInfo {
            page,
            page_size: self.page_size,
            total_pages,
            total_rows,
            start,
            end,
        };
        (info, &rows[start..end])
    }
}

/// What a renderer needs to draw the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    /// Index of the first row on the page.
    pub start: usize,
    /// One past the last row on the page.
    pub end: usize,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
