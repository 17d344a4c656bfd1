//! Scroll offset for the paginated text viewer.

use std::ops::Range;

use crate::model::PageAction;

/// Footer shown when more content lies below the window.
pub const MORE_SUFFIX: &str = "(More)";

/// Footer shown when the window reaches the last line.
pub const END_SUFFIX: &str = "(End of message)";

/// First visible line of a fixed sequence of lines.
///
/// # Clamping Behavior
/// The offset always lies in `[0, max(0, len - height)]`: paging down never
/// starts a window past the point where the last line is at the bottom, and
/// paging up stops at line 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextScroll {
    offset: usize,
    height: usize,
    len: usize,
}

impl TextScroll {
    /// Scroll state at the top of `len` lines, `height` lines per page.
    /// A zero height is treated as one line.
    pub fn new(height: usize, len: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
            len,
        }
    }

    /// First visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Lines per page.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.height)
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) -> bool {
        self.scroll_to(self.offset.saturating_add(self.height))
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) -> bool {
        self.scroll_to(self.offset.saturating_sub(self.height))
    }

    /// Jump to the first window.
    pub fn top(&mut self) -> bool {
        self.scroll_to(0)
    }

    /// Jump to the last window.
    pub fn bottom(&mut self) -> bool {
        self.scroll_to(self.max_offset())
    }

    /// Apply a navigation action. Returns whether the offset changed.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Previous => self.page_up(),
            PageAction::Next => self.page_down(),
            PageAction::First => self.top(),
            PageAction::Last => self.bottom(),
        }
    }

    /// Indices of the visible lines.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.len);
        start..(start + self.height).min(self.len)
    }

    /// Whether content lies below the window.
    pub fn has_more(&self) -> bool {
        self.offset + self.height < self.len
    }

    /// `(More)` or `(End of message)` depending on the window position.
    pub fn footer(&self) -> &'static str {
        if self.has_more() {
            MORE_SUFFIX
        } else {
            END_SUFFIX
        }
    }

    /// The viewer's result: visible lines joined by `\n`, a blank line, then
    /// the footer.
    pub fn result<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let visible: Vec<&str> = lines[self.visible_range()]
            .iter()
            .map(AsRef::as_ref)
            .collect();
        format!("{}\n\n{}", visible.join("\n"), self.footer())
    }

    fn scroll_to(&mut self, offset: usize) -> bool {
        let clamped = offset.min(self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }
}
