use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// Pages are 1-based. `total` is the number of records across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` records; at least 1 so an empty
    /// catalog still renders "page 1 of 1".
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}
