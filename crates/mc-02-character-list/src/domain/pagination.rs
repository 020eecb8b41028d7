//! # Pagination Cursor
//!
//! The cursor counts characters already loaded. The API is always asked for
//! everything from offset 0 up to `cursor + page_size`, so the cursor doubles
//! as the next request's base limit.

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationCursor {
    position: u32,
    page_size: u32,
}

impl PaginationCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            position: 0,
            page_size,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Limit to request for the next page.
    pub fn next_limit(&self) -> u32 {
        self.position.saturating_add(self.page_size)
    }

    /// Reset to the limit the server confirmed for the initial page.
    pub fn reset_to(&mut self, confirmed_limit: u32) {
        self.position = confirmed_limit;
    }

    /// Advance one page and return the index range that became new.
    ///
    /// Only call this once the page request has succeeded.
    pub fn advance(&mut self) -> Range<usize> {
        let start = self.position as usize;
        self.position = self.next_limit();
        start..self.position as usize
    }
}
