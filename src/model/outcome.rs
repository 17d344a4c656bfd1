//! Closed result type for prompt loops.
//!
//! A prompt ends in exactly one of three ways: the user produced a value,
//! asked to go back (Escape), or asked to leave the session (Interrupt).
//! Modelling the two control signals as variants keeps propagation
//! exhaustive; callers cannot forget to handle them.

use crate::model::error::ControlSignal;

/// How a prompt loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The user produced a value.
    Value(T),
    /// The user pressed Escape: cancel this prompt, return to the parent.
    Back,
    /// The user pressed the interrupt key: terminate the session.
    Exit,
}

impl<T> Outcome<T> {
    /// Map the carried value, leaving control signals untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Back => Outcome::Back,
            Outcome::Exit => Outcome::Exit,
        }
    }

    /// The value, if the user produced one.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Back | Outcome::Exit => None,
        }
    }

    /// Borrow the carried value.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Back => Outcome::Back,
            Outcome::Exit => Outcome::Exit,
        }
    }

    /// The control signal, if the prompt did not produce a value.
    pub fn signal(&self) -> Option<ControlSignal> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Back => Some(ControlSignal::BackRequest),
            Outcome::Exit => Some(ControlSignal::ExitRequest),
        }
    }

    /// Whether the user asked to go back.
    pub fn is_back(&self) -> bool {
        matches!(self, Outcome::Back)
    }

    /// Whether the user asked to exit.
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }

    /// Convert to a `Result`, turning control signals into errors so callers
    /// can forward them with `?`.
    ///
    /// # Errors
    ///
    /// Returns the control signal when the prompt did not produce a value.
    pub fn into_result(self) -> Result<T, ControlSignal> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Back => Err(ControlSignal::BackRequest),
            Outcome::Exit => Err(ControlSignal::ExitRequest),
        }
    }
}

impl<T> From<ControlSignal> for Outcome<T> {
    fn from(signal: ControlSignal) -> Self {
        match signal {
            ControlSignal::BackRequest => Outcome::Back,
            ControlSignal::ExitRequest => Outcome::Exit,
        }
    }
}
