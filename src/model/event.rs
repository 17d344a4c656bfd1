//! Discrete input events consumed by the prompt loops.
//!
//! Events are produced outside the core (terminal driver, channel producer,
//! scripted fixture) and consumed strictly one at a time. An event is
//! immutable once emitted.
//!
//! # Notation
//!
//! Events can be written in the bracketed notation used by boot scripts and
//! test fixtures: a single character stands for itself, named keys are
//! enclosed in angle brackets (`<Enter>`, `<PageDown>`, `<C-d>`, ...).
//! Names are matched case-insensitively, so `<pageUp>` and `<PageUp>` are
//! the same event.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named (non-printable) keys recognised by the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedKey {
    /// Submit the current line.
    Enter,
    /// Delete the last character of the line.
    Backspace,
    /// Cancel the current prompt (becomes a back request).
    Escape,
    /// Terminate the whole session (Ctrl-D by default).
    Interrupt,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
}

impl NamedKey {
    /// All named keys, in declaration order.
    pub const ALL: [NamedKey; 12] = [
        NamedKey::Enter,
        NamedKey::Backspace,
        NamedKey::Escape,
        NamedKey::Interrupt,
        NamedKey::Left,
        NamedKey::Right,
        NamedKey::Up,
        NamedKey::Down,
        NamedKey::PageUp,
        NamedKey::PageDown,
        NamedKey::Home,
        NamedKey::End,
    ];

    /// Snake-case name used in configuration files (`page_down`, `interrupt`).
    pub fn name(self) -> &'static str {
        match self {
            NamedKey::Enter => "enter",
            NamedKey::Backspace => "backspace",
            NamedKey::Escape => "escape",
            NamedKey::Interrupt => "interrupt",
            NamedKey::Left => "left",
            NamedKey::Right => "right",
            NamedKey::Up => "up",
            NamedKey::Down => "down",
            NamedKey::PageUp => "page_up",
            NamedKey::PageDown => "page_down",
            NamedKey::Home => "home",
            NamedKey::End => "end",
        }
    }

    /// Look up a named key by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Bracketed notation for this key (`<PageDown>`).
    pub fn notation(self) -> &'static str {
        match self {
            NamedKey::Enter => "<Enter>",
            NamedKey::Backspace => "<Backspace>",
            NamedKey::Escape => "<Escape>",
            NamedKey::Interrupt => "<C-d>",
            NamedKey::Left => "<Left>",
            NamedKey::Right => "<Right>",
            NamedKey::Up => "<Up>",
            NamedKey::Down => "<Down>",
            NamedKey::PageUp => "<PageUp>",
            NamedKey::PageDown => "<PageDown>",
            NamedKey::Home => "<Home>",
            NamedKey::End => "<End>",
        }
    }
}

/// Direction of a pointer-wheel scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Wheel rolled away from the user.
    Up,
    /// Wheel rolled towards the user.
    Down,
}

/// A single input event.
///
/// Sum type: exactly one of printable character, named key, or wheel scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A printable character typed by the user.
    Character(char),
    /// A named key.
    Key(NamedKey),
    /// A pointer-wheel scroll.
    Wheel(WheelDirection),
}

/// Error returned when event notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid key notation: {0:?}")]
pub struct InvalidKeyNotation(pub String);

impl Event {
    /// Build an ordered event list from bracketed notation.
    ///
    /// # Errors
    ///
    /// Returns the first notation that does not name an event.
    ///
    /// # Examples
    ///
    /// ```
    /// use bootmenu::model::{Event, NamedKey};
    ///
    /// let events = Event::script(&["1", "<Enter>"]).unwrap();
    /// assert_eq!(events, vec![Event::Character('1'), Event::Key(NamedKey::Enter)]);
    /// ```
    pub fn script<S: AsRef<str>>(notation: &[S]) -> Result<Vec<Event>, InvalidKeyNotation> {
        notation.iter().map(|n| n.as_ref().parse()).collect()
    }

    /// Whether this is the given named key.
    pub fn is_key(&self, key: NamedKey) -> bool {
        matches!(self, Event::Key(k) if *k == key)
    }
}

impl FromStr for Event {
    type Err = InvalidKeyNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Event::Character(ch));
        }

        let inner = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| InvalidKeyNotation(s.to_string()))?;

        let event = match inner.to_ascii_lowercase().as_str() {
            "enter" => Event::Key(NamedKey::Enter),
            "backspace" => Event::Key(NamedKey::Backspace),
            "escape" | "esc" => Event::Key(NamedKey::Escape),
            "c-d" | "c-c" => Event::Key(NamedKey::Interrupt),
            "left" => Event::Key(NamedKey::Left),
            "right" => Event::Key(NamedKey::Right),
            "up" => Event::Key(NamedKey::Up),
            "down" => Event::Key(NamedKey::Down),
            "pageup" | "pgup" => Event::Key(NamedKey::PageUp),
            "pagedown" | "pgdn" => Event::Key(NamedKey::PageDown),
            "home" => Event::Key(NamedKey::Home),
            "end" => Event::Key(NamedKey::End),
            "mousewheelup" => Event::Wheel(WheelDirection::Up),
            "mousewheeldown" => Event::Wheel(WheelDirection::Down),
            "space" => Event::Character(' '),
            "tab" => Event::Character('\t'),
            _ => return Err(InvalidKeyNotation(s.to_string())),
        };

        Ok(event)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Character(' ') => f.write_str("<Space>"),
            Event::Character('\t') => f.write_str("<Tab>"),
            Event::Character(ch) => write!(f, "{ch}"),
            Event::Key(key) => f.write_str(key.notation()),
            Event::Wheel(WheelDirection::Up) => f.write_str("<MouseWheelUp>"),
            Event::Wheel(WheelDirection::Down) => f.write_str("<MouseWheelDown>"),
        }
    }
}
