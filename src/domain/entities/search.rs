//! Search result envelope.

use super::Image;

/// One page of search hits plus the totals Unsplash reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    /// Total hits across all pages.
    pub total: u64,
    /// Total pages at the current page size.
    pub total_pages: u64,
    /// The requested page of photos, in arrival order.
    pub images: Vec<Image>,
}
