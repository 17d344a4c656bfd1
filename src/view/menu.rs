//! Selection list rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::view::constants::{
    BORDER_COLUMNS, BORDER_ROWS, DEFAULT_SUFFIX, INPUT_PREFIX, MENU_HINT,
};
use crate::view::helpers::{count_newlines, tail_to_width, truncate_to_width};
use crate::view::screen::MenuScreen;
use crate::view::styles::PromptStyles;

/// Menu box.
///
/// Displays:
/// - Title (centered in the top border) and message lines
/// - `[i] label` for each entry on the page, ` (default)` marked
/// - `Page p/n` indicator
/// - `> buffer` input line and the error line, if any
/// - Key hint footer
pub struct MenuList<'a> {
    screen: &'a MenuScreen<'a>,
    styles: &'a PromptStyles,
}

impl<'a> MenuList<'a> {
    /// Create new MenuList widget.
    pub fn new(screen: &'a MenuScreen<'a>, styles: &'a PromptStyles) -> Self {
        Self { screen, styles }
    }

    /// Rows needed to show the whole menu.
    pub fn height(&self) -> u16 {
        let message_rows = if self.screen.message.is_empty() {
            0
        } else {
            count_newlines(self.screen.message) + 2
        };
        // entries + blank + page indicator + input + error + hint
        let rows = message_rows + self.screen.items.len() + 5;
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(BORDER_ROWS)
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let inner_width = usize::from(area.width.saturating_sub(BORDER_COLUMNS));
        let mut lines: Vec<Line> = Vec::new();

        if !self.screen.message.is_empty() {
            lines.extend(self.screen.message.split('\n').map(Line::raw));
            lines.push(Line::default());
        }

        for item in &self.screen.items {
            let number = format!("[{}] ", item.number);
            let mut room = inner_width.saturating_sub(number.width());
            if item.is_default {
                room = room.saturating_sub(DEFAULT_SUFFIX.width());
            }

            let mut spans = vec![
                Span::styled(number, self.styles.number),
                Span::raw(truncate_to_width(&item.label, room).to_string()),
            ];
            if item.is_default {
                spans.push(Span::styled(DEFAULT_SUFFIX, self.styles.default_marker));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(
            Line::styled(self.screen.page_indicator(), self.styles.footer)
                .alignment(Alignment::Right),
        );

        let room = inner_width.saturating_sub(INPUT_PREFIX.width() + 1);
        lines.push(Line::from(vec![
            Span::styled(INPUT_PREFIX, self.styles.input),
            Span::styled(tail_to_width(self.screen.buffer, room), self.styles.input),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]));
        lines.push(match self.screen.error {
            Some(error) => Line::styled(error, self.styles.error),
            None => Line::default(),
        });
        lines.push(Line::styled(MENU_HINT, self.styles.footer).alignment(Alignment::Center));

        let title = format!(" {} ", self.screen.title.replace('\n', " "));

        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(Line::styled(title, self.styles.title).alignment(Alignment::Center))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.styles.border),
            )
            .render(area, buf);
    }
}
