//! Pagination types
//!
//! List endpoints return a [`Page`] value instead of a bare vector so that
//! clients always get the total count and page bounds alongside the items.

use serde::{Deserialize, Serialize};

/// Fixed page size for all list views
pub const PAGE_SIZE: u32 = 20;

/// One page of a list result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Total record count across all pages
    pub total: u64,
    /// Current page number (1-indexed)
    pub page: u32,
    /// Page size used for the query
    pub limit: u32,
    /// Total page count (at least 1)
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            (total.div_ceil(limit as u64) as u32).max(1)
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Create a single-page response (for unpaginated lists)
    pub fn single(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }
}

/// Clamp a requested 1-indexed page number into the valid range for `total`
/// records. Page 0 (or below) clamps to 1; a page past the end clamps to the
/// last page that holds data. An empty collection always yields page 1.
pub fn clamp_page(requested: u32, total: u64, limit: u32) -> u32 {
    let last = if limit > 0 {
        (total.div_ceil(limit as u64) as u32).max(1)
    } else {
        1
    };
    requested.clamp(1, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts() {
        let page = Page::new(vec!["a", "b", "c"], 100, 2, 20);
        assert_eq!(page.total, 100);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_empty_page_has_one_page() {
        let page = Page::<()>::new(vec![], 0, 1, 20);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_clamp_page_low() {
        assert_eq!(clamp_page(0, 45, 20), 1);
    }

    #[test]
    fn test_clamp_page_high() {
        // 45 records at 20/page = 3 pages
        assert_eq!(clamp_page(99, 45, 20), 3);
    }

    #[test]
    fn test_clamp_page_in_range() {
        assert_eq!(clamp_page(2, 45, 20), 2);
    }

    #[test]
    fn test_clamp_page_empty() {
        assert_eq!(clamp_page(5, 0, 20), 1);
    }
}
