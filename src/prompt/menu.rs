//! Selection list loop.
//!
//! Page navigation events move the [`PageWindow`] and clear any error line,
//! leaving the typed buffer alone. Everything else goes to an embedded
//! [`LineEditor`] whose validator accepts only numbers addressing an entry on
//! the visible page.

use tracing::{debug, info};

use crate::model::{
    Entry, EntryNumber, NamedKey, Outcome, PageAction, PromptError, OUT_OF_RANGE_MESSAGE,
};
use crate::source::EventSource;
use crate::state::{EditStep, LineEditor, PageWindow};
use crate::view::{MenuItem, MenuScreen, Renderer, Screen};

/// Fixed parts of a menu screen.
#[derive(Debug, Clone, Copy)]
struct MenuFrame<'a> {
    title: &'a str,
    message: &'a str,
    width: u16,
}

fn screen<'a, E: Entry>(
    frame: MenuFrame<'a>,
    entries: &[E],
    window: &PageWindow,
    editor: &'a LineEditor,
) -> Screen<'a> {
    let items = entries[window.visible_range()]
        .iter()
        .enumerate()
        .map(|(number, entry)| MenuItem {
            number,
            label: entry.label(),
            is_default: entry.is_default(),
        })
        .collect();

    Screen::Menu(MenuScreen {
        title: frame.title,
        message: frame.message,
        items,
        page: window.index(),
        page_count: window.page_count(),
        buffer: editor.buffer(),
        error: editor.error(),
        width: frame.width,
    })
}

/// Let the user pick an entry; returns its absolute index.
///
/// Numbers typed are relative to the visible page: `0` is the first entry
/// shown. A rejected number leaves the page where it was. With no entries
/// every number is out of range and only Escape or the interrupt key end
/// the loop.
///
/// # Errors
///
/// Returns `PromptError` if the event source closes or fails first.
pub fn select_index<E, S, R>(
    title: &str,
    message: &str,
    entries: &[E],
    page_size: usize,
    width: u16,
    source: &mut S,
    renderer: &mut R,
) -> Result<Outcome<usize>, PromptError>
where
    E: Entry,
    S: EventSource + ?Sized,
    R: Renderer + ?Sized,
{
    let frame = MenuFrame {
        title,
        message,
        width,
    };
    let mut window = PageWindow::new(page_size, entries.len());
    let mut editor = LineEditor::new();

    loop {
        renderer.render(&screen(frame, entries, &window, &editor));

        let event = source.next_event()?;

        if let Some(action) = PageAction::for_menu(&event) {
            if window.apply(action) {
                editor.clear_error();
                debug!(title, ?action, page = window.index(), "Menu page changed");
            }
            continue;
        }

        let submitting = event.is_key(NamedKey::Enter);
        let validator = EntryNumber::new(window.visible_len());
        match editor.handle(event, &validator) {
            EditStep::Pending => {
                if let Some(error) = editor.error().filter(|_| submitting) {
                    debug!(title, error, buffer = editor.buffer(), "Entry number rejected");
                }
            }
            EditStep::Submitted(accepted) => {
                let resolved = validator
                    .parse(&accepted.value)
                    .ok()
                    .and_then(|in_page| window.absolute(in_page));
                match resolved {
                    Some(index) => {
                        info!(title, index, page = window.index(), "Menu entry selected");
                        return Ok(Outcome::Value(index));
                    }
                    None => {
                        debug!(title, buffer = %accepted.value, "Entry number out of range");
                        editor.reject(OUT_OF_RANGE_MESSAGE);
                    }
                }
            }
            EditStep::Back => {
                info!(title, "Menu cancelled");
                return Ok(Outcome::Back);
            }
            EditStep::Exit => {
                info!(title, "Menu aborted");
                return Ok(Outcome::Exit);
            }
        }
    }
}

/// Let the user pick an entry from `entries`.
///
/// Same loop as [`select_index`], resolving the index to a reference into
/// the caller's slice.
///
/// # Errors
///
/// Returns `PromptError` if the event source closes or fails first.
pub fn prompt_menu_entry<'e, E, S, R>(
    title: &str,
    message: &str,
    entries: &'e [E],
    page_size: usize,
    width: u16,
    source: &mut S,
    renderer: &mut R,
) -> Result<Outcome<&'e E>, PromptError>
where
    E: Entry,
    S: EventSource + ?Sized,
    R: Renderer + ?Sized,
{
    let outcome = select_index(title, message, entries, page_size, width, source, renderer)?;
    Ok(outcome.map(|index| &entries[index]))
}
