//! Submission validators for the line editor.
//!
//! A validator is a pure function called once per submission (never per
//! keystroke). It either accepts the candidate, returning a normalized value
//! and an optional note, or rejects it with a message shown beneath the input.

/// A candidate accepted by a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Normalized value handed back to the caller.
    pub value: String,
    /// Trailing context returned alongside the value (empty when none).
    pub note: String,
}

impl Accepted {
    /// Accept `value` with no note.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            note: String::new(),
        }
    }

    /// Attach a note to the accepted value.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Result of validating a submission: accepted value or error message.
pub type Validation = Result<Accepted, String>;

/// Decides whether submitted text is acceptable and how to normalize it.
pub trait Validator {
    /// Validate one candidate.
    fn validate(&self, candidate: &str) -> Validation;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Validation,
{
    fn validate(&self, candidate: &str) -> Validation {
        self(candidate)
    }
}

/// Identity validator: accepts every candidate verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysValid;

impl Validator for AlwaysValid {
    fn validate(&self, candidate: &str) -> Validation {
        Ok(Accepted::new(candidate))
    }
}

/// Rejects blank input; accepted values are trimmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonEmpty;

/// Message for blank submissions.
pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty.";

impl Validator for NonEmpty {
    fn validate(&self, candidate: &str) -> Validation {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            Err(EMPTY_INPUT_MESSAGE.to_string())
        } else {
            Ok(Accepted::new(trimmed))
        }
    }
}

/// Message for submissions that are not a non-negative integer.
pub const NOT_A_NUMBER_MESSAGE: &str = "Input is not a valid entry number.";

/// Message for numbers that do not address a visible entry.
pub const OUT_OF_RANGE_MESSAGE: &str = "Entry number out of range.";

/// Validator for page-relative entry numbers.
///
/// Accepts only a non-empty run of ASCII digits (no sign, no whitespace)
/// whose value is below the number of entries visible on the current page.
/// The normalized value is the decimal index without leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryNumber {
    visible: usize,
}

impl EntryNumber {
    /// Validator for a page showing `visible` entries.
    pub fn new(visible: usize) -> Self {
        Self { visible }
    }

    /// Parse a candidate into a page-relative index.
    ///
    /// # Errors
    ///
    /// Returns the message to display when the candidate is not a number or
    /// does not address a visible entry.
    pub fn parse(&self, candidate: &str) -> Result<usize, String> {
        if candidate.is_empty() || !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NOT_A_NUMBER_MESSAGE.to_string());
        }

        // All digits: the only possible failure is overflow, which is out of range anyway.
        let index: usize = candidate
            .parse()
            .map_err(|_| OUT_OF_RANGE_MESSAGE.to_string())?;

        if index < self.visible {
            Ok(index)
        } else {
            Err(OUT_OF_RANGE_MESSAGE.to_string())
        }
    }
}

impl Validator for EntryNumber {
    fn validate(&self, candidate: &str) -> Validation {
        self.parse(candidate)
            .map(|index| Accepted::new(index.to_string()))
    }
}
