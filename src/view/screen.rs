//! Render descriptions handed from the prompt loops to a renderer.
//!
//! A [`Screen`] says "draw this text at this region". It borrows from the
//! prompt's state, carries no behavior, and can be turned into plain text
//! for logs and assertions.

use ratatui::layout::Rect;

use crate::view::constants::{DEFAULT_SUFFIX, INPUT_PREFIX};

/// Everything a renderer needs to draw one prompt state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Line editor.
    Input(InputScreen<'a>),
    /// Paginated text viewer.
    Text(TextScreen<'a>),
    /// Selection list.
    Menu(MenuScreen<'a>),
}

/// Line editor box at a fixed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputScreen<'a> {
    /// Prompt title, possibly spanning several lines.
    pub title: &'a str,
    /// Where the box goes.
    pub region: Rect,
    /// Current buffer.
    pub buffer: &'a str,
    /// Error line beneath the buffer.
    pub error: Option<&'a str>,
}

/// Visible window of the text viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextScreen<'a> {
    /// Lines in the window, top to bottom.
    pub lines: Vec<&'a str>,
    /// `(More)` or `(End of message)`.
    pub footer: &'static str,
    /// Box width in columns.
    pub width: u16,
}

/// One row of a menu page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Page-relative number the user types.
    pub number: usize,
    /// Entry label.
    pub label: String,
    /// Whether the entry is marked as default.
    pub is_default: bool,
}

impl MenuItem {
    /// `[i] label`, with the default suffix when marked.
    pub fn line(&self) -> String {
        let suffix = if self.is_default { DEFAULT_SUFFIX } else { "" };
        format!("[{}] {}{}", self.number, self.label, suffix)
    }
}

/// Current page of a selection list with its embedded line editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuScreen<'a> {
    /// Menu title.
    pub title: &'a str,
    /// Message shown between the title and the entries.
    pub message: &'a str,
    /// Entries on the current page.
    pub items: Vec<MenuItem>,
    /// Zero-based page index.
    pub page: usize,
    /// Total number of pages (at least 1).
    pub page_count: usize,
    /// Line editor buffer.
    pub buffer: &'a str,
    /// Line editor error line.
    pub error: Option<&'a str>,
    /// Box width in columns.
    pub width: u16,
}

impl MenuScreen<'_> {
    /// `Page p/n`, one-based.
    pub fn page_indicator(&self) -> String {
        format!("Page {}/{}", self.page + 1, self.page_count)
    }
}

impl Screen<'_> {
    /// Plain-text rendering without borders or styles.
    ///
    /// For a text screen this is exactly the string the viewer returns on
    /// Escape.
    pub fn to_text(&self) -> String {
        match self {
            Screen::Input(input) => {
                let mut out = format!("{}\n{}{}", input.title, INPUT_PREFIX, input.buffer);
                if let Some(error) = input.error {
                    out.push('\n');
                    out.push_str(error);
                }
                out
            }
            Screen::Text(text) => format!("{}\n\n{}", text.lines.join("\n"), text.footer),
            Screen::Menu(menu) => {
                let mut lines = vec![menu.title.to_string()];
                if !menu.message.is_empty() {
                    lines.push(menu.message.to_string());
                }
                lines.extend(menu.items.iter().map(MenuItem::line));
                lines.push(menu.page_indicator());
                lines.push(format!("{}{}", INPUT_PREFIX, menu.buffer));
                if let Some(error) = menu.error {
                    lines.push(error.to_string());
                }
                lines.join("\n")
            }
        }
    }
}
