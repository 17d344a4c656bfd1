//! Property-based tests for prompt invariants.
//!
//! Tests validate:
//! 1. The line editor is a stack: Character pushes, Backspace pops
//! 2. Rejected submissions keep the buffer and keep editing
//! 3. Escape always backs out of the line editor
//! 4. The text viewer returns the first or last window with the right footer
//! 5. Numerals on a single page select or are rejected
//! 6. Page navigation clamps at both ends

use bootmenu::model::{
    AlwaysValid, Event, LabeledEntry, NamedKey, Outcome, Validation, Validator,
};
use bootmenu::prompt::{display_result, process_input, select_index};
use bootmenu::source::ScriptedSource;
use bootmenu::state::{EditStep, LineEditor, PageWindow};
use bootmenu::view::{input_region, NullRenderer};
use proptest::prelude::*;

struct RejectAll;

impl Validator for RejectAll {
    fn validate(&self, _candidate: &str) -> Validation {
        Err("never".to_string())
    }
}

/// `Some(c)` types `c`, `None` presses Backspace.
fn edits() -> impl Strategy<Value = Vec<Option<char>>> {
    prop::collection::vec(prop::option::weighted(0.8, any::<char>()), 0..40)
}

fn to_events(edits: &[Option<char>]) -> Vec<Event> {
    edits
        .iter()
        .map(|edit| match edit {
            Some(ch) => Event::Character(*ch),
            None => Event::Key(NamedKey::Backspace),
        })
        .collect()
}

fn lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Line {i}")).collect()
}

// ===== Property 1-3: Line Editor =====

proptest! {
    #[test]
    fn editing_is_a_stack(edits in edits()) {
        let mut expected = String::new();
        for edit in &edits {
            match edit {
                Some(ch) => expected.push(*ch),
                None => {
                    expected.pop();
                }
            }
        }

        let mut events = to_events(&edits);
        events.push(Event::Key(NamedKey::Enter));
        let mut source = ScriptedSource::new(events);

        let outcome = process_input(
            "t",
            input_region("t", 0, 0, 40),
            &AlwaysValid,
            &mut source,
            &mut NullRenderer,
        )
        .unwrap();

        prop_assert_eq!(outcome.value().map(|a| a.value), Some(expected));
    }

    #[test]
    fn rejection_keeps_buffer_and_editing(typed in "[a-z0-9 ]{0,20}", more in "[a-z]{1,5}") {
        let mut editor = LineEditor::new();
        for ch in typed.chars() {
            let _ = editor.handle(Event::Character(ch), &RejectAll);
        }

        let step = editor.handle(Event::Key(NamedKey::Enter), &RejectAll);
        prop_assert_eq!(step, EditStep::Pending);
        prop_assert_eq!(editor.buffer(), typed.as_str());
        prop_assert_eq!(editor.error(), Some("never"));

        for ch in more.chars() {
            let _ = editor.handle(Event::Character(ch), &RejectAll);
        }
        prop_assert_eq!(editor.buffer(), format!("{typed}{more}"));
        prop_assert!(!editor.is_finished());
    }

    #[test]
    fn escape_always_backs_out(edits in edits()) {
        let mut events = to_events(&edits);
        events.push(Event::Key(NamedKey::Escape));
        let mut source = ScriptedSource::new(events);

        let outcome = process_input(
            "t",
            input_region("t", 0, 0, 40),
            &AlwaysValid,
            &mut source,
            &mut NullRenderer,
        )
        .unwrap();

        prop_assert_eq!(outcome, Outcome::Back);
    }
}

// ===== Property 4: Text Viewer =====

proptest! {
    #[test]
    fn viewer_first_window(n in 0usize..80, height in 1usize..30) {
        let lines = lines(n);
        let mut source = ScriptedSource::new([Event::Key(NamedKey::Escape)]);
        let outcome = display_result(&lines, height, 70, &mut source, &mut NullRenderer).unwrap();

        let expected = if n <= height {
            format!("{}\n\n(End of message)", lines.join("\n"))
        } else {
            format!("{}\n\n(More)", lines[..height].join("\n"))
        };
        prop_assert_eq!(outcome, Outcome::Value(expected));
    }

    #[test]
    fn viewer_clamps_to_last_window(n in 1usize..80, height in 1usize..30, extra in 0usize..5) {
        let lines = lines(n);
        let page_downs = n.div_ceil(height) + extra;
        let mut events = vec![Event::Key(NamedKey::PageDown); page_downs];
        events.push(Event::Key(NamedKey::Escape));
        let mut source = ScriptedSource::new(events);

        let outcome = display_result(&lines, height, 70, &mut source, &mut NullRenderer).unwrap();

        let start = n.saturating_sub(height);
        let expected = format!("{}\n\n(End of message)", lines[start..].join("\n"));
        prop_assert_eq!(outcome, Outcome::Value(expected));
    }
}

// ===== Property 5-6: Selection Navigator =====

proptest! {
    #[test]
    fn single_page_numerals(total in 0usize..=10, numeral in 0usize..15) {
        let entries: Vec<LabeledEntry> =
            (0..total).map(|i| LabeledEntry::new(format!("entry {i}"))).collect();

        let mut events: Vec<Event> = numeral.to_string().chars().map(Event::Character).collect();
        events.push(Event::Key(NamedKey::Enter));
        events.push(Event::Key(NamedKey::Escape));
        let mut source = ScriptedSource::new(events);

        let outcome =
            select_index("t", "", &entries, 10, 50, &mut source, &mut NullRenderer).unwrap();

        if numeral < total {
            prop_assert_eq!(outcome, Outcome::Value(numeral));
            prop_assert_eq!(source.remaining(), 1);
        } else {
            prop_assert_eq!(outcome, Outcome::Back);
        }
    }

    #[test]
    fn page_navigation_clamps(size in 1usize..12, total in 0usize..100) {
        let mut window = PageWindow::new(size, total);
        prop_assert!(!window.prev());
        prop_assert_eq!(window.index(), 0);

        window.last();
        let last = window.index();
        prop_assert_eq!(last, window.page_count().saturating_sub(1));
        prop_assert!(!window.next());
        prop_assert_eq!(window.index(), last);
        prop_assert!(window.visible_len() <= size);
    }
}
