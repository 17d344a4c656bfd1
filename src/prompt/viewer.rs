//! Paginated text viewer loop.

use tracing::{debug, info};

use crate::model::{Event, NamedKey, Outcome, PageAction, PromptError};
use crate::source::EventSource;
use crate::state::TextScroll;
use crate::view::{Renderer, Screen, TextScreen};

/// Page through `lines`, `height` lines at a time.
///
/// PageUp/PageDown and the wheel move one page, Home/End jump to the first
/// or last window; every other event is ignored. Escape returns the visible
/// window joined by `\n`, a blank line, and `(More)` or
/// `(End of message)`. The interrupt key yields [`Outcome::Exit`].
///
/// # Errors
///
/// Returns `PromptError` if the event source closes or fails first.
pub fn display_result<L, S, R>(
    lines: &[L],
    height: usize,
    width: u16,
    source: &mut S,
    renderer: &mut R,
) -> Result<Outcome<String>, PromptError>
where
    L: AsRef<str>,
    S: EventSource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut scroll = TextScroll::new(height, lines.len());

    loop {
        renderer.render(&Screen::Text(TextScreen {
            lines: lines[scroll.visible_range()]
                .iter()
                .map(AsRef::as_ref)
                .collect(),
            footer: scroll.footer(),
            width,
        }));

        let event = source.next_event()?;

        match event {
            Event::Key(NamedKey::Escape) => {
                info!(offset = scroll.offset(), "Text viewer closed");
                return Ok(Outcome::Value(scroll.result(lines)));
            }
            Event::Key(NamedKey::Interrupt) => {
                info!("Text viewer aborted");
                return Ok(Outcome::Exit);
            }
            _ => {
                if let Some(action) = PageAction::for_viewer(&event) {
                    if scroll.apply(action) {
                        debug!(?action, offset = scroll.offset(), "Text viewer scrolled");
                    }
                }
            }
        }
    }
}
