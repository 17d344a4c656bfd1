//! Line editor loop.

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::model::{Accepted, NamedKey, Outcome, PromptError, Validator};
use crate::source::EventSource;
use crate::state::{EditStep, LineEditor};
use crate::view::{InputScreen, Renderer, Screen};

fn screen<'a>(title: &'a str, region: Rect, editor: &'a LineEditor) -> Screen<'a> {
    Screen::Input(InputScreen {
        title,
        region,
        buffer: editor.buffer(),
        error: editor.error(),
    })
}

/// Read one validated line.
///
/// Renders the box at `region` on start and after every event that leaves
/// the editor open. Enter runs `validator` on the buffer: acceptance returns
/// the normalized value and note, rejection shows the message beneath the
/// input and keeps the buffer. Escape yields [`Outcome::Back`], the
/// interrupt key [`Outcome::Exit`].
///
/// # Errors
///
/// Returns `PromptError` if the event source closes or fails before a
/// terminal state is reached.
pub fn process_input<V, S, R>(
    title: &str,
    region: Rect,
    validator: &V,
    source: &mut S,
    renderer: &mut R,
) -> Result<Outcome<Accepted>, PromptError>
where
    V: Validator + ?Sized,
    S: EventSource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut editor = LineEditor::new();
    renderer.render(&screen(title, region, &editor));

    loop {
        let event = source.next_event()?;
        let submitting = event.is_key(NamedKey::Enter);

        match editor.handle(event, validator) {
            EditStep::Pending => {
                if let Some(error) = editor.error().filter(|_| submitting) {
                    debug!(title, error, "Input rejected");
                }
                renderer.render(&screen(title, region, &editor));
            }
            EditStep::Submitted(accepted) => {
                info!(title, "Input submitted");
                return Ok(Outcome::Value(accepted));
            }
            EditStep::Back => {
                info!(title, "Input cancelled");
                return Ok(Outcome::Back);
            }
            EditStep::Exit => {
                info!(title, "Input aborted");
                return Ok(Outcome::Exit);
            }
        }
    }
}
