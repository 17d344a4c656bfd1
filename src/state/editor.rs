//! Line editor state machine (pure state transitions).
//!
//! Accumulates a single line of text from character, backspace, enter,
//! escape and interrupt events. Editing is a stack: characters are pushed,
//! backspace pops. No I/O happens here; the prompt loop reads events and
//! renders after every transition.

use crate::model::{Accepted, Event, NamedKey, Validator};

/// Result of feeding one event to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    /// Still editing. The caller re-renders and reads the next event.
    Pending,
    /// The validator accepted the buffer.
    Submitted(Accepted),
    /// Escape was pressed. The buffer is discarded.
    Back,
    /// The interrupt key was pressed.
    Exit,
}

/// State of one line-editing session.
///
/// # States
/// - editing: `finished == false`, buffer and optional error line
/// - submitted / cancelled / aborted: `finished == true`; further events are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    error: Option<String>,
    finished: bool,
}

impl LineEditor {
    /// Fresh editor with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Error line from the last rejected submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a terminal step has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Append a character and clear any stale error.
    pub fn push(&mut self, ch: char) {
        self.buffer.push(ch);
        self.error = None;
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Run the validator on the current buffer.
    ///
    /// On rejection the buffer is kept so the user can correct it.
    pub fn submit<V: Validator + ?Sized>(&mut self, validator: &V) -> EditStep {
        match validator.validate(&self.buffer) {
            Ok(accepted) => {
                self.finished = true;
                self.error = None;
                EditStep::Submitted(accepted)
            }
            Err(message) => {
                self.error = Some(message);
                EditStep::Pending
            }
        }
    }

    /// Reopen a submitted editor with an error line.
    ///
    /// Used when the caller discovers, after validation, that the value cannot
    /// be used. The buffer is kept.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.finished = false;
        self.error = Some(message.into());
    }

    /// Drop the error line, leaving the buffer alone.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Apply one event.
    ///
    /// Named keys other than Enter/Backspace/Escape/Interrupt and wheel events
    /// are ignored. Events arriving after a terminal step are ignored too.
    pub fn handle<V: Validator + ?Sized>(&mut self, event: Event, validator: &V) -> EditStep {
        if self.finished {
            return EditStep::Pending;
        }

        match event {
            Event::Character(ch) => {
                self.push(ch);
                EditStep::Pending
            }
            Event::Key(NamedKey::Backspace) => {
                self.backspace();
                EditStep::Pending
            }
            Event::Key(NamedKey::Enter) => self.submit(validator),
            Event::Key(NamedKey::Escape) => {
                self.finished = true;
                self.buffer.clear();
                EditStep::Back
            }
            Event::Key(NamedKey::Interrupt) => {
                self.finished = true;
                EditStep::Exit
            }
            Event::Key(_) | Event::Wheel(_) => EditStep::Pending,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
