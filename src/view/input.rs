//! Line editor widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::view::constants::{BORDER_COLUMNS, BORDER_ROWS, INPUT_BODY_ROWS, INPUT_PREFIX};
use crate::view::helpers::{paragraph, tail_to_width, text_rows};
use crate::view::screen::InputScreen;
use crate::view::styles::PromptStyles;

/// Region for an input box at (`x`, `y`) that fits `title`.
///
/// Height is the title rows plus the input and error lines plus the border.
pub fn input_region(title: &str, x: u16, y: u16, width: u16) -> Rect {
    let height = text_rows(title)
        .saturating_add(INPUT_BODY_ROWS)
        .saturating_add(BORDER_ROWS);
    Rect::new(x, y, width, height)
}

/// Bordered box: title lines, `> buffer` with a block cursor, error line.
pub struct InputBox<'a> {
    screen: &'a InputScreen<'a>,
    styles: &'a PromptStyles,
}

impl<'a> InputBox<'a> {
    /// Create new InputBox widget.
    pub fn new(screen: &'a InputScreen<'a>, styles: &'a PromptStyles) -> Self {
        Self { screen, styles }
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let inner_width = usize::from(area.width.saturating_sub(BORDER_COLUMNS));
        // Leave room for the prefix and the cursor cell
        let room = inner_width.saturating_sub(INPUT_PREFIX.width() + 1);
        let shown = tail_to_width(self.screen.buffer, room);

        let mut lines: Vec<Line> = self
            .screen
            .title
            .split('\n')
            .map(|line| Line::styled(line, self.styles.title))
            .collect();

        lines.push(Line::from(vec![
            Span::styled(INPUT_PREFIX, self.styles.input),
            Span::styled(shown, self.styles.input),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]));

        if let Some(error) = self.screen.error {
            lines.push(Line::styled(error, self.styles.error));
        }

        paragraph(Text::from(lines), false)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border),
            )
            .render(area, buf);
    }
}
