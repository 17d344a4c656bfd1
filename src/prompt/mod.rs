//! Blocking read-evaluate-render loops.
//!
//! Each prompt reads one event, applies one state transition, renders, and
//! repeats until it reaches a terminal state. Prompts never run
//! concurrently: a menu drives its line editor by plain call and return,
//! and each call owns its editor and page state for its whole lifetime.
//!
//! The free functions take every parameter explicitly. [`Prompter`] bundles
//! an event source, a renderer and a [`PromptConfig`] for callers that run
//! several prompts in sequence.

mod confirm;
mod input;
mod menu;
mod viewer;

pub use confirm::{prompt_confirmation, CONFIRMATION_CHOICES};
pub use input::process_input;
pub use menu::{prompt_menu_entry, select_index};
pub use viewer::display_result;

use ratatui::layout::Rect;

use crate::config::PromptConfig;
use crate::model::{Accepted, Entry, Outcome, PromptError, Validator};
use crate::source::EventSource;
use crate::view::{input_region, Renderer};

/// An event source, a renderer and the sizes prompts are drawn with.
///
/// # Examples
///
/// ```
/// use bootmenu::config::PromptConfig;
/// use bootmenu::model::Outcome;
/// use bootmenu::prompt::Prompter;
/// use bootmenu::source::ScriptedSource;
/// use bootmenu::view::NullRenderer;
///
/// let source = ScriptedSource::from_notation(&["1", "<Enter>"]).unwrap();
/// let mut prompter = Prompter::new(source, NullRenderer, PromptConfig::default());
/// assert_eq!(prompter.confirm("Continue?").unwrap(), Outcome::Value(false));
/// ```
pub struct Prompter<S, R> {
    source: S,
    renderer: R,
    config: PromptConfig,
}

impl<S: EventSource, R: Renderer> Prompter<S, R> {
    /// Bundle a source, a renderer and a configuration.
    pub fn new(source: S, renderer: R, config: PromptConfig) -> Self {
        Self {
            source,
            renderer,
            config,
        }
    }

    /// Sizes in use.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// The event source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Take the source and renderer back.
    pub fn into_parts(self) -> (S, R) {
        (self.source, self.renderer)
    }

    /// Read one validated line in an input box at the top-left corner.
    ///
    /// # Errors
    ///
    /// See [`process_input`].
    pub fn read_line<V: Validator + ?Sized>(
        &mut self,
        title: &str,
        validator: &V,
    ) -> Result<Outcome<Accepted>, PromptError> {
        let region = input_region(title, 0, 0, self.config.menu_width());
        self.read_line_at(title, region, validator)
    }

    /// Read one validated line in an input box at `region`.
    ///
    /// # Errors
    ///
    /// See [`process_input`].
    pub fn read_line_at<V: Validator + ?Sized>(
        &mut self,
        title: &str,
        region: Rect,
        validator: &V,
    ) -> Result<Outcome<Accepted>, PromptError> {
        process_input(title, region, validator, &mut self.source, &mut self.renderer)
    }

    /// Page through `lines`.
    ///
    /// # Errors
    ///
    /// See [`display_result`].
    pub fn display_text<L: AsRef<str>>(
        &mut self,
        lines: &[L],
    ) -> Result<Outcome<String>, PromptError> {
        display_result(
            lines,
            self.config.text_height(),
            self.config.result_width(),
            &mut self.source,
            &mut self.renderer,
        )
    }

    /// Let the user pick one of `entries`.
    ///
    /// # Errors
    ///
    /// See [`prompt_menu_entry`].
    pub fn select_entry<'e, E: Entry>(
        &mut self,
        title: &str,
        message: &str,
        entries: &'e [E],
    ) -> Result<Outcome<&'e E>, PromptError> {
        prompt_menu_entry(
            title,
            message,
            entries,
            self.config.page_size(),
            self.config.menu_width(),
            &mut self.source,
            &mut self.renderer,
        )
    }

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// See [`prompt_confirmation`].
    pub fn confirm(&mut self, question: &str) -> Result<Outcome<bool>, PromptError> {
        prompt_confirmation(
            question,
            self.config.menu_width(),
            &mut self.source,
            &mut self.renderer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LabeledEntry, NonEmpty};
    use crate::source::ScriptedSource;
    use crate::view::RecordingRenderer;

    fn prompter(keys: &[&str]) -> Prompter<ScriptedSource, RecordingRenderer> {
        Prompter::new(
            ScriptedSource::from_notation(keys).unwrap(),
            RecordingRenderer::new(),
            PromptConfig::new(3, 2, 40, 60).unwrap(),
        )
    }

    #[test]
    fn prompts_share_one_event_stream() {
        let mut p = prompter(&[
            "<Enter>", "h", "i", "<Enter>", // read_line
            "<PageDown>", "<Escape>", // display_text
            "<PageDown>", "0", "<Enter>", // select_entry
            "0", "<Enter>", // confirm
        ]);

        let line = p.read_line("Name", &NonEmpty).unwrap();
        assert_eq!(line.value().map(|a| a.value), Some("hi".to_string()));

        let text = p.display_text(&["a", "b", "c"]).unwrap();
        assert_eq!(text, Outcome::Value("b\nc\n\n(End of message)".to_string()));

        let entries: Vec<LabeledEntry> = ["w", "x", "y", "z"].into_iter().map(LabeledEntry::new).collect();
        let chosen = p.select_entry("Pick", "", &entries).unwrap();
        assert_eq!(chosen, Outcome::Value(&entries[3]));

        assert_eq!(p.confirm("Sure?").unwrap(), Outcome::Value(true));
        assert_eq!(p.source_mut().remaining(), 0);
    }

    #[test]
    fn configured_sizes_reach_the_screens() {
        let mut p = prompter(&["<Escape>"]);
        let entries: Vec<LabeledEntry> =
            (0..7).map(|i| LabeledEntry::new(format!("e{i}"))).collect();
        let outcome = p.select_entry("Pick", "", &entries).unwrap();
        assert_eq!(outcome, Outcome::Back);

        let frame = p.renderer().last().unwrap();
        assert!(frame.contains("Page 1/3"), "page size 3 gives 3 pages:\n{frame}");
        assert!(frame.contains("[2] e2") && !frame.contains("[3]"), "got:\n{frame}");
    }

    #[test]
    fn back_from_child_lets_caller_reprompt_parent() {
        let mut p = prompter(&["<Escape>", "1", "<Enter>"]);
        let entries = ["first", "second"];

        let mut chosen = None;
        while chosen.is_none() {
            match p.select_entry("Parent", "", &entries).unwrap() {
                Outcome::Value(entry) => {
                    match p.confirm("Really?").unwrap() {
                        Outcome::Value(_) => chosen = Some(*entry),
                        Outcome::Back => continue,
                        Outcome::Exit => break,
                    }
                }
                Outcome::Back | Outcome::Exit => break,
            }
        }
        // Escape on the parent menu ends the loop without a choice
        assert_eq!(chosen, None);
        let (source, _) = p.into_parts();
        assert_eq!(source.remaining(), 2);
    }
}
