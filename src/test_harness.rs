//! Acceptance test harness for prompt rendering
//!
//! Wraps a [`Prompter`] over a scripted event source and a ratatui
//! `TestBackend`, so tests can queue keys, run a real prompt, and read back
//! what the terminal would show.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use crate::config::PromptConfig;
use crate::model::Event;
use crate::prompt::Prompter;
use crate::source::ScriptedSource;
use crate::view::{PromptStyles, TerminalRenderer};

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Trailing spaces on each row and blank rows are dropped.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogSink(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber on this thread and return what it logged.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
    (value, String::from_utf8_lossy(&bytes).into_owned())
}

/// Prompter drawing into an in-memory terminal.
pub(crate) struct PromptHarness {
    prompter: Prompter<ScriptedSource, TerminalRenderer<TestBackend>>,
}

impl PromptHarness {
    /// Harness with default prompt sizes on an 80x24 terminal.
    pub(crate) fn new() -> Self {
        Self::with_config(80, 24, PromptConfig::default())
    }

    /// Harness with custom terminal size and prompt sizes.
    pub(crate) fn with_config(width: u16, height: u16, config: PromptConfig) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        Self {
            prompter: Prompter::new(
                ScriptedSource::default(),
                TerminalRenderer::with_styles(terminal, PromptStyles::default()),
                config,
            ),
        }
    }

    /// Queue keys in bracketed notation (`"1"`, `"<Enter>"`).
    pub(crate) fn send_keys(&mut self, notation: &[&str]) {
        let events = Event::script(notation).expect("test notation must be valid");
        for event in events {
            self.prompter.source_mut().push(event);
        }
    }

    /// Queue each character of `text` as a keystroke.
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.prompter.source_mut().push(Event::Character(ch));
        }
    }

    /// Run prompts against the queued keys.
    pub(crate) fn prompter(&mut self) -> &mut Prompter<ScriptedSource, TerminalRenderer<TestBackend>> {
        &mut self.prompter
    }

    /// Keys queued but not yet consumed.
    pub(crate) fn pending(&mut self) -> usize {
        self.prompter.source_mut().remaining()
    }

    /// The last frame drawn.
    pub(crate) fn render_to_string(&self) -> String {
        buffer_to_string(self.prompter.renderer().terminal().backend().buffer())
    }
}
