//! Fixed-size page window over an ordered sequence.

use std::ops::Range;

use crate::model::PageAction;

/// Which page of a paginated sequence is visible.
///
/// # Invariant
/// `0 <= index <= last_index()` where `last_index() = max(0, ceil(total / size) - 1)`.
/// Every navigation clamps to this range; nothing wraps past the first or
/// last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    index: usize,
    size: usize,
    total: usize,
}

impl PageWindow {
    /// Window on page 0. A `size` of zero is treated as one row.
    pub fn new(size: usize, total: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
            total,
        }
    }

    /// Same window moved to `index`, clamped to the last page.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index.min(self.last_index());
        self
    }

    /// Current page (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rows per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of items being paginated.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages. An empty sequence still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.size).max(1)
    }

    /// Index of the last page.
    pub fn last_index(&self) -> usize {
        self.page_count() - 1
    }

    /// Absolute index of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.index * self.size
    }

    /// Number of items on the current page.
    pub fn visible_len(&self) -> usize {
        self.total.saturating_sub(self.offset()).min(self.size)
    }

    /// Absolute indices of the items on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset().min(self.total);
        start..start + self.visible_len()
    }

    /// Resolve a page-relative index to an absolute one.
    ///
    /// Returns `None` when `in_page` does not address a visible item.
    pub fn absolute(&self, in_page: usize) -> Option<usize> {
        (in_page < self.visible_len()).then(|| self.offset() + in_page)
    }

    /// Move back one page. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        self.move_to(self.index.saturating_sub(1))
    }

    /// Move forward one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        self.move_to(self.index.saturating_add(1))
    }

    /// Jump to the first page. Returns whether the page changed.
    pub fn first(&mut self) -> bool {
        self.move_to(0)
    }

    /// Jump to the last page. Returns whether the page changed.
    pub fn last(&mut self) -> bool {
        self.move_to(self.last_index())
    }

    /// Apply a navigation action. Returns whether the page changed.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Previous => self.prev(),
            PageAction::Next => self.next(),
            PageAction::First => self.first(),
            PageAction::Last => self.last(),
        }
    }

    fn move_to(&mut self, index: usize) -> bool {
        let clamped = index.min(self.last_index());
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }
}
