//! Acceptance tests: yes/no confirmation.

use bootmenu::model::{ControlSignal, Outcome};
use bootmenu::prompt::prompt_confirmation;
use bootmenu::source::ScriptedSource;
use bootmenu::view::NullRenderer;

fn confirm(keys: &[&str]) -> Outcome<bool> {
    let mut source = ScriptedSource::from_notation(keys).unwrap();
    prompt_confirmation("Do you want to continue?", 50, &mut source, &mut NullRenderer).unwrap()
}

#[test]
fn prompt_confirmation_cases() {
    for (name, keys, want) in [
        ("select_yes", &["0", "<Enter>"][..], Ok(true)),
        ("select_no", &["1", "<Enter>"][..], Ok(false)),
        ("go_back", &["<Escape>", "<Enter>"][..], Err(ControlSignal::BackRequest)),
        ("exit", &["<C-d>", "<Enter>"][..], Err(ControlSignal::ExitRequest)),
        ("change_response", &["1", "<Backspace>", "0", "<Enter>"][..], Ok(true)),
        (
            "submit_without_value",
            &["1", "<Backspace>", "<Enter>", "0", "<Enter>"][..],
            Ok(true),
        ),
        (
            "out_of_range_then_yes",
            &["2", "<Enter>", "<Backspace>", "0", "<Enter>"][..],
            Ok(true),
        ),
    ] {
        assert_eq!(confirm(keys).into_result(), want, "{name}");
    }
}

#[test]
fn signal_outcomes_report_their_signal() {
    assert_eq!(confirm(&["<Escape>"]).signal(), Some(ControlSignal::BackRequest));
    assert_eq!(confirm(&["<C-d>"]).signal(), Some(ControlSignal::ExitRequest));
    assert_eq!(confirm(&["0", "<Enter>"]).signal(), None);
}
