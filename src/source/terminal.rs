//! Live terminal input via crossterm.
//!
//! Raw crossterm events are translated into prompt events through
//! [`KeyBindings`]. Anything the prompts have no use for (key releases,
//! resizes, focus changes, pastes, clicks) is dropped and the source keeps
//! waiting.

use crossterm::event::{
    self as term, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use tracing::trace;

use crate::config::KeyBindings;
use crate::model::{Event, PromptError, WheelDirection};
use crate::source::EventSource;

/// Event source reading the controlling terminal.
///
/// The terminal must already be in raw mode (and have mouse capture enabled
/// for wheel events); setup and teardown belong to the caller.
#[derive(Debug, Clone, Default)]
pub struct TerminalSource {
    bindings: KeyBindings,
}

impl TerminalSource {
    /// Source using the given key bindings.
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// The active key bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Translate a crossterm event, or `None` if prompts ignore it.
    pub fn translate(&self, event: term::Event) -> Option<Event> {
        match event {
            term::Event::Key(key) => self.translate_key(key),
            term::Event::Mouse(MouseEvent { kind, .. }) => match kind {
                MouseEventKind::ScrollUp => Some(Event::Wheel(WheelDirection::Up)),
                MouseEventKind::ScrollDown => Some(Event::Wheel(WheelDirection::Down)),
                _ => None,
            },
            _ => None,
        }
    }

    fn translate_key(&self, key: KeyEvent) -> Option<Event> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if let Some(named) = self.bindings.get(key) {
            return Some(Event::Key(named));
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Event::Character(ch))
            }
            _ => None,
        }
    }
}

impl EventSource for TerminalSource {
    fn next_event(&mut self) -> Result<Event, PromptError> {
        loop {
            let raw = term::read()?;
            match self.translate(raw.clone()) {
                Some(event) => return Ok(event),
                None => trace!(?raw, "Ignoring terminal event"),
            }
        }
    }
}
