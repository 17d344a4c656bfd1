//! Input event sources.
//!
//! This module provides the single ordered event stream the prompt loops
//! consume:
//! - [`ChannelSource`] for a producer thread feeding a crossbeam channel
//! - [`ScriptedSource`] for a pre-buffered, pull-based event list
//! - [`TerminalSource`] for live crossterm keyboard and mouse input
//!
//! Every source delivers events in the order they were produced, each event
//! exactly once, and blocks until the next event is available.

use crate::model::{Event, PromptError};

pub mod channel;
pub mod scripted;
pub mod terminal;

pub use channel::ChannelSource;
pub use scripted::ScriptedSource;
pub use terminal::TerminalSource;

/// A blocking, ordered stream of input events.
pub trait EventSource {
    /// Block until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::SourceClosed` when no further event can arrive,
    /// `PromptError::Io` when the underlying device failed.
    fn next_event(&mut self) -> Result<Event, PromptError>;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> Result<Event, PromptError> {
        (**self).next_event()
    }
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn next_event(&mut self) -> Result<Event, PromptError> {
        (**self).next_event()
    }
}
