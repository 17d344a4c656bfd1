//! Pre-buffered event source.
//!
//! Pull-based: events are popped from a queue in order. Used by tests, by
//! `--keys` replay in the demo binary, and anywhere a cooperative single
//! thread needs to drive a prompt without a real channel.

use std::collections::VecDeque;

use crate::model::{Event, InvalidKeyNotation, PromptError};
use crate::source::EventSource;

/// Event source over a buffered list of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedSource {
    events: VecDeque<Event>,
}

impl ScriptedSource {
    /// Source that yields `events` in order, then reports `SourceClosed`.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Source built from bracketed notation (`"1"`, `"<Enter>"`).
    ///
    /// # Errors
    ///
    /// Returns the first notation that does not name an event.
    pub fn from_notation<S: AsRef<str>>(notation: &[S]) -> Result<Self, InvalidKeyNotation> {
        Event::script(notation).map(Self::new)
    }

    /// Append an event to the end of the script.
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Events not yet consumed.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl FromIterator<Event> for ScriptedSource {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> Result<Event, PromptError> {
        self.events.pop_front().ok_or(PromptError::SourceClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedKey;

    #[test]
    fn yields_events_in_order_then_closes() {
        let mut source = ScriptedSource::from_notation(&["a", "<Enter>"]).unwrap();
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_event().unwrap(), Event::Character('a'));
        assert_eq!(source.next_event().unwrap(), Event::Key(NamedKey::Enter));
        assert!(matches!(
            source.next_event(),
            Err(PromptError::SourceClosed)
        ));
    }

    #[test]
    fn push_appends_to_script() {
        let mut source: ScriptedSource = std::iter::once(Event::Character('1')).collect();
        source.push(Event::Key(NamedKey::Escape));
        assert_eq!(source.remaining(), 2);
        source.next_event().unwrap();
        assert_eq!(source.next_event().unwrap(), Event::Key(NamedKey::Escape));
    }

    #[test]
    fn invalid_notation_is_reported() {
        let err = ScriptedSource::from_notation(&["<Bogus>"]).unwrap_err();
        assert_eq!(err, InvalidKeyNotation("<Bogus>".to_string()));
    }

    #[test]
    fn tab_notation_is_scripted_as_tab_character() {
        let mut source = ScriptedSource::from_notation(&["a", "<Tab>", "<Enter>"]).unwrap();
        assert_eq!(source.next_event().unwrap(), Event::Character('a'));
        assert_eq!(source.next_event().unwrap(), Event::Character('\t'));
        assert_eq!(source.next_event().unwrap(), Event::Key(NamedKey::Enter));
    }
}
