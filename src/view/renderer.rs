//! Output boundary of the prompt loops.
//!
//! The loops call [`Renderer::render`] after every state change. Rendering
//! has no return value: a renderer that fails logs the failure and the loop
//! carries on reading events.

use std::collections::VecDeque;

use ratatui::{backend::Backend, Terminal};
use tracing::warn;

use crate::view::layout::render_screen;
use crate::view::screen::Screen;
use crate::view::styles::PromptStyles;

/// Draws prompt screens.
pub trait Renderer {
    /// Draw `screen`, replacing whatever the previous call drew.
    fn render(&mut self, screen: &Screen<'_>);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, screen: &Screen<'_>) {
        (**self).render(screen);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, screen: &Screen<'_>) {
        (**self).render(screen);
    }
}

/// Renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _screen: &Screen<'_>) {}
}

/// Renderer that keeps screens as plain text.
///
/// Holds the most recent `capacity` frames (all frames when unbounded).
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: VecDeque<String>,
    capacity: Option<usize>,
}

impl RecordingRenderer {
    /// Recorder keeping every frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder keeping only the last `capacity` frames.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Recorded frames, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(String::as_str)
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<&str> {
        self.frames.back().map(String::as_str)
    }

    /// Number of frames held.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been rendered (or nothing is kept).
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, screen: &Screen<'_>) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.frames.len() >= capacity {
                self.frames.pop_front();
            }
        }
        self.frames.push_back(screen.to_text());
    }
}

/// Renderer drawing through a ratatui terminal.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    styles: PromptStyles,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wrap a terminal, using default styles.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self::with_styles(terminal, PromptStyles::default())
    }

    /// Wrap a terminal with explicit styles.
    pub fn with_styles(terminal: Terminal<B>, styles: PromptStyles) -> Self {
        Self { terminal, styles }
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the wrapped terminal (for clearing, resizing).
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Unwrap the terminal.
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, screen: &Screen<'_>) {
        let styles = &self.styles;
        if let Err(error) = self
            .terminal
            .draw(|frame| render_screen(frame, screen, styles))
        {
            warn!(%error, "Failed to draw prompt");
        }
    }
}
