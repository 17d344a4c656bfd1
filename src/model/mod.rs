//! Domain model types (pure).
//!
//! All types in this module are pure data: events, entries, validators and
//! the closed result types of the prompt loops.

pub mod entry;
pub mod error;
pub mod event;
pub mod key_action;
pub mod outcome;
pub mod validation;

// Re-export for convenience
pub use entry::{Entry, LabeledEntry};
pub use error::{AppError, ControlSignal, PromptError};
pub use event::{Event, InvalidKeyNotation, NamedKey, WheelDirection};
pub use key_action::PageAction;
pub use outcome::Outcome;
pub use validation::{
    Accepted, AlwaysValid, EntryNumber, NonEmpty, Validation, Validator, EMPTY_INPUT_MESSAGE,
    NOT_A_NUMBER_MESSAGE, OUT_OF_RANGE_MESSAGE,
};
