//! Channel-backed event source.
//!
//! A single external producer (input thread, test driver) sends events; the
//! active prompt receives them one at a time. No batching or backpressure:
//! the channel is unbounded.

use crossbeam_channel::{Receiver, Sender};

use crate::model::{Event, PromptError};
use crate::source::EventSource;

/// Event source reading from a crossbeam channel.
#[derive(Debug, Clone)]
pub struct ChannelSource {
    rx: Receiver<Event>,
}

impl ChannelSource {
    /// Wrap an existing receiver.
    pub fn new(rx: Receiver<Event>) -> Self {
        Self { rx }
    }

    /// Create an unbounded channel and return its sending half with the source.
    pub fn channel() -> (Sender<Event>, Self) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (tx, Self::new(rx))
    }

    /// Number of events sent but not yet consumed.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl EventSource for ChannelSource {
    fn next_event(&mut self) -> Result<Event, PromptError> {
        self.rx.recv().map_err(|_| PromptError::SourceClosed)
    }
}
