//! Fixed-size pagination.

/// Articles per page.
pub const PAGE_SIZE: usize = 50;

/// Pages shown either side of the current one in pagination controls.
pub const PAGE_WINDOW: usize = 3;

/// One page of a sequence plus page-count metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, always within `1..=total_pages`.
    pub current_page: usize,
    pub total_pages: usize,
    /// Length of the whole sequence.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Number of pages needed for `len` items. Never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slice out one page. Out-of-range requests are clamped, never rejected.
pub fn paginate<T>(sequence: &[T], page_size: usize, requested_page: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(sequence.len(), page_size);
    let current_page = clamp_page(requested_page, total_pages);

    let start = (current_page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(sequence.len());
    let items = sequence.get(start..end).unwrap_or(&[]);

    Page {
        items,
        current_page,
        total_pages,
        total_items: sequence.len(),
    }
}

/// Page numbers visible in pagination controls: the window around the
/// current page plus first/last shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    /// Show a "1" shortcut before the window.
    pub first: bool,
    /// Show an ellipsis between the "1" shortcut and the window.
    pub leading_gap: bool,
    /// Show an ellipsis between the window and the last-page shortcut.
    pub trailing_gap: bool,
    /// Show a last-page shortcut after the window.
    pub last: bool,
}

impl PageWindow {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = clamp_page(current_page, total_pages);
        let start = current_page.saturating_sub(PAGE_WINDOW).max(1);
        let end = (current_page + PAGE_WINDOW).min(total_pages);
        Self {
            start,
            end,
            first: start > 1,
            leading_gap: start > 2,
            trailing_gap: end + 1 < total_pages,
            last: end < total_pages,
        }
    }

    /// Page numbers inside the window.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
