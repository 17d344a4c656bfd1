//! Yes/No confirmation.

use tracing::info;

use crate::model::{Outcome, PromptError};
use crate::prompt::menu::select_index;
use crate::source::EventSource;
use crate::view::Renderer;

/// The two choices, in menu order. Index 0 means yes.
pub const CONFIRMATION_CHOICES: [&str; 2] = ["Yes", "No"];

/// Ask a yes/no question as a two-entry menu.
///
/// `0` answers yes, `1` answers no; Escape and the interrupt key propagate
/// as [`Outcome::Back`] and [`Outcome::Exit`].
///
/// # Errors
///
/// Returns `PromptError` if the event source closes or fails first.
pub fn prompt_confirmation<S, R>(
    question: &str,
    width: u16,
    source: &mut S,
    renderer: &mut R,
) -> Result<Outcome<bool>, PromptError>
where
    S: EventSource + ?Sized,
    R: Renderer + ?Sized,
{
    let outcome = select_index(
        question,
        "",
        &CONFIRMATION_CHOICES,
        CONFIRMATION_CHOICES.len(),
        width,
        source,
        renderer,
    )?
    .map(|index| index == 0);

    if let Outcome::Value(answer) = outcome {
        info!(question, answer, "Confirmation answered");
    }
    Ok(outcome)
}
