//! Screen placement.
//!
//! Input boxes go where the caller asked; text and menu boxes are centered
//! with a fixed width and a height that fits their content.

use ratatui::{layout::Rect, Frame};

use crate::view::input::InputBox;
use crate::view::menu::MenuList;
use crate::view::screen::Screen;
use crate::view::styles::PromptStyles;
use crate::view::text::TextPage;

/// Draw one screen into the frame.
pub fn render_screen(frame: &mut Frame, screen: &Screen<'_>, styles: &PromptStyles) {
    let area = frame.area();

    match screen {
        Screen::Input(input) => {
            let region = input.region.intersection(area);
            if region.is_empty() {
                return;
            }
            frame.render_widget(InputBox::new(input, styles), region);
        }
        Screen::Text(text) => {
            let page = TextPage::new(text, styles);
            let region = centered_rect(text.width, page.height(), area);
            frame.render_widget(page, region);
        }
        Screen::Menu(menu) => {
            let list = MenuList::new(menu, styles);
            let region = centered_rect(menu.width, list.height(), area);
            frame.render_widget(list, region);
        }
    }
}

/// Calculate centered rect with fixed size, clipped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let popup_x = (area.width - popup_width) / 2;
    let popup_y = (area.height - popup_height) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}
