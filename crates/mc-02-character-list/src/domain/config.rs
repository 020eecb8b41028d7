//! List controller configuration

/// Characters requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Initial page size and pagination step.
    pub page_size: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListConfig {
    /// Builder-style method to set the page size (zero is bumped to one).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
