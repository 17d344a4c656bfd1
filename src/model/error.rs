//! Error types for bootmenu.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose cleanly via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`ControlSignal`] - User intent to cancel (`BackRequest`) or leave (`ExitRequest`).
//!   Not a failure: prompts report these through [`Outcome`](crate::model::Outcome) and
//!   callers may lift them into a `Result` with `Outcome::into_result`.
//! - [`PromptError`] - The event source failed or ran dry. The only real failure a
//!   prompt loop can return.
//! - [`AppError`] - Top-level error of the demo binary, wrapping prompt, configuration,
//!   logging and terminal failures.
//!
//! # Recovery Strategy
//!
//! Validation failures never appear here: they are absorbed by the line editor and
//! shown as an error line beneath the input while the loop continues.

use thiserror::Error;

/// User-initiated control signal.
///
/// These are distinguished results rather than failures: the caller decides
/// whether to re-render a parent prompt (`BackRequest`) or end the session
/// (`ExitRequest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ControlSignal {
    /// The user pressed Escape on the current prompt.
    #[error("back request")]
    BackRequest,

    /// The user pressed the interrupt key (Ctrl-D by default).
    #[error("exit request")]
    ExitRequest,
}

/// Failure of the event source feeding a prompt loop.
///
/// Prompt loops block on the next event; when no further event can arrive
/// the loop cannot reach a terminal state and returns this error instead.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The event source is exhausted or its producer disconnected.
    ///
    /// **When this occurs**: a scripted source ran out of events, or the
    /// sending half of a channel source was dropped.
    #[error("Event source closed before the prompt finished")]
    SourceClosed,

    /// Reading from the terminal failed.
    ///
    /// **When this occurs**: crossterm `event::read` returned an I/O error,
    /// e.g. the controlling terminal went away.
    #[error("Event source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for the demo binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A prompt loop failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    /// Configuration could not be loaded or was invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup/teardown or file reading failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
