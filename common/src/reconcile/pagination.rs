use std::ops::Range;

/// Fixed page size of the result list.
pub const ITEMS_PER_PAGE: usize = 5;

/// A page projected onto a result sequence of `total` items.
///
/// `display_start`/`display_end` are 1-indexed and inclusive, both `0` for an
/// empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub display_start: usize,
    pub display_end: usize,
    pub range: Range<usize>,
}

impl PageWindow {
    /// Computes the window of `page` (1-indexed), clamped into `1..=total_pages`.
    pub fn new(total: usize, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page);
        let current_page = page.clamp(1, total_pages.max(1));
        let start = ((current_page - 1) * per_page).min(total);
        let end = (current_page * per_page).min(total);

        Self {
            current_page,
            total_pages,
            display_start: if total > 0 { start + 1 } else { 0 },
            display_end: end,
            range: start..end,
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
