//! Text viewer widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::view::constants::{BORDER_COLUMNS, BORDER_ROWS, TEXT_HINT};
use crate::view::helpers::{paragraph, truncate_to_width};
use crate::view::screen::TextScreen;
use crate::view::styles::PromptStyles;

/// Visible window, a blank line, the footer, and a key hint, in a box.
///
/// Lines are truncated rather than wrapped so the window height stays the
/// page height.
pub struct TextPage<'a> {
    screen: &'a TextScreen<'a>,
    styles: &'a PromptStyles,
}

impl<'a> TextPage<'a> {
    /// Create new TextPage widget.
    pub fn new(screen: &'a TextScreen<'a>, styles: &'a PromptStyles) -> Self {
        Self { screen, styles }
    }

    /// Rows needed to show the whole screen.
    pub fn height(&self) -> u16 {
        // window + blank + footer + hint
        let rows = self.screen.lines.len().saturating_add(3);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(BORDER_ROWS)
    }
}

impl Widget for TextPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let inner_width = usize::from(area.width.saturating_sub(BORDER_COLUMNS));

        let mut lines: Vec<Line> = self
            .screen
            .lines
            .iter()
            .map(|line| Line::raw(truncate_to_width(line, inner_width)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(self.screen.footer, self.styles.footer));
        lines.push(Line::styled(TEXT_HINT, self.styles.footer));

        paragraph(Text::from(lines), false)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border),
            )
            .render(area, buf);
    }
}
