//! Shared text helpers for the prompt widgets.

use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

/// Number of `'\n'` characters in `text`.
///
/// A title with `n` newlines occupies `n + 1` rows.
pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Rows needed to show `text` unwrapped, saturating at `u16::MAX`.
pub fn text_rows(text: &str) -> u16 {
    u16::try_from(count_newlines(text) + 1).unwrap_or(u16::MAX)
}

/// Wrapping paragraph over `text`, optionally inside a full border.
///
/// Leading whitespace is preserved so indented boot parameters line up.
pub fn paragraph<'a, T: Into<Text<'a>>>(text: T, bordered: bool) -> Paragraph<'a> {
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    if bordered {
        paragraph.block(Block::default().borders(Borders::ALL))
    } else {
        paragraph
    }
}

/// Longest prefix of `s` that fits in `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0usize;
    for (idx, ch) in s.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            return &s[..idx];
        }
        width += ch_width;
    }
    s
}

/// Longest suffix of `s` that fits in `max_width` columns.
///
/// The line editor shows the end of an overlong buffer, where typing happens.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0usize;
    for (idx, ch) in s.char_indices().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            return &s[idx + ch.len_utf8()..];
        }
        width += ch_width;
    }
    s
}
