//! Page-navigation actions independent of the keys that trigger them.

use crate::model::event::{Event, NamedKey, WheelDirection};

/// Page-level navigation intent.
///
/// These represent user intent, not specific keys. The selection list and the
/// text viewer each map a different subset of events onto these actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
    /// Move back one page. Clamps at the first page.
    Previous,
    /// Move forward one page. Clamps at the last page.
    Next,
    /// Jump to the first page.
    First,
    /// Jump to the last page.
    Last,
}

impl PageAction {
    /// Navigation mapping for the selection list.
    ///
    /// Left/Up/PageUp/WheelUp go back, Right/Down/PageDown/WheelDown go
    /// forward, Home and End jump. Everything else belongs to the line editor.
    pub fn for_menu(event: &Event) -> Option<Self> {
        match event {
            Event::Key(NamedKey::Left | NamedKey::Up | NamedKey::PageUp)
            | Event::Wheel(WheelDirection::Up) => Some(PageAction::Previous),
            Event::Key(NamedKey::Right | NamedKey::Down | NamedKey::PageDown)
            | Event::Wheel(WheelDirection::Down) => Some(PageAction::Next),
            Event::Key(NamedKey::Home) => Some(PageAction::First),
            Event::Key(NamedKey::End) => Some(PageAction::Last),
            _ => None,
        }
    }

    /// Navigation mapping for the text viewer.
    ///
    /// Only page keys and the wheel scroll; arrows are ignored.
    pub fn for_viewer(event: &Event) -> Option<Self> {
        match event {
            Event::Key(NamedKey::PageUp) | Event::Wheel(WheelDirection::Up) => {
                Some(PageAction::Previous)
            }
            Event::Key(NamedKey::PageDown) | Event::Wheel(WheelDirection::Down) => {
                Some(PageAction::Next)
            }
            Event::Key(NamedKey::Home) => Some(PageAction::First),
            Event::Key(NamedKey::End) => Some(PageAction::Last),
            _ => None,
        }
    }
}
