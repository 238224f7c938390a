//! Fixed-size page slicing.
//!
//! # Responsibility
//! - Slice an ordered sequence into one page and report page arithmetic.
//! - Expose previous/next bounds for page controls.
//!
//! # Invariants
//! - `total_pages == ceil(len / items_per_page)`, zero for empty input.
//! - `current_page` is reported as requested and never clamped here.
//! - An out-of-range page yields an empty slice, never a panic.

use std::ops::RangeInclusive;

/// One page of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the requested page, at most `items_per_page` long.
    pub items: Vec<T>,
    /// Requested 1-based page number.
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page number behind the "previous" control, if enabled.
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous().then(|| self.current_page - 1)
    }

    /// Page number behind the "next" control, if enabled.
    pub fn next_page(&self) -> Option<usize> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Numbered page links, `1..=total_pages`.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Whether pagination controls should be rendered at all.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 0
    }
}

/// Number of pages needed for `len` items; zero page size yields zero.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    len.div_ceil(items_per_page)
}

/// Slices `items` to the 1-based `current_page`.
///
/// Page `0`, a zero page size and pages past the end all produce an empty
/// page; `total_pages` is still reported from the full input.
pub fn paginate<T: Clone>(items: &[T], current_page: usize, items_per_page: usize) -> Page<T> {
    let total_pages = total_pages(items.len(), items_per_page);
    let page_items = match current_page.checked_sub(1) {
        Some(page_index) if items_per_page > 0 => {
            let start = page_index.saturating_mul(items_per_page).min(items.len());
            let end = start.saturating_add(items_per_page).min(items.len());
            items[start..end].to_vec()
        }
        _ => Vec::new(),
    };

    Page {
        items: page_items,
        current_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::{paginate, total_pages};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 4), 0);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn page_zero_and_huge_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 4).items.is_empty());
        assert!(paginate(&items, usize::MAX, 4).items.is_empty());
        assert!(paginate(&items, 1, 0).items.is_empty());
    }
}
