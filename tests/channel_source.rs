//! Integration test: prompts fed by a producer thread over a channel.

use std::thread;

use bootmenu::config::PromptConfig;
use bootmenu::model::{Event, LabeledEntry, NamedKey, Outcome, PromptError};
use bootmenu::prompt::{prompt_menu_entry, Prompter};
use bootmenu::source::ChannelSource;
use bootmenu::view::{NullRenderer, RecordingRenderer};

fn press(keys: &[&str]) -> Vec<Event> {
    Event::script(keys).expect("valid notation")
}

#[test]
fn producer_thread_drives_menu() {
    let entries: Vec<LabeledEntry> = (1..=12)
        .map(|i| LabeledEntry::new(format!("entry {i}")))
        .collect();
    let (tx, mut source) = ChannelSource::channel();

    let producer = thread::spawn(move || {
        for event in press(&["<PageDown>", "0", "<Enter>"]) {
            tx.send(event).expect("receiver alive");
        }
    });

    let chosen = prompt_menu_entry(
        "test menu title",
        "",
        &entries,
        10,
        50,
        &mut source,
        &mut NullRenderer,
    )
    .unwrap();
    producer.join().unwrap();

    assert_eq!(chosen, Outcome::Value(&entries[10]));
}

#[test]
fn dropped_sender_closes_the_prompt() {
    let (tx, mut source) = ChannelSource::channel();
    tx.send(Event::Character('1')).unwrap();
    drop(tx);

    let err = prompt_menu_entry("t", "", &["a", "b"], 10, 50, &mut source, &mut NullRenderer)
        .unwrap_err();
    assert!(matches!(err, PromptError::SourceClosed));
}

#[test]
fn events_are_consumed_in_order_across_prompts() {
    let (tx, source) = ChannelSource::channel();
    for event in press(&["1", "<Enter>", "<Escape>"]) {
        tx.send(event).unwrap();
    }

    let mut prompter = Prompter::new(source, RecordingRenderer::new(), PromptConfig::default());
    assert_eq!(prompter.confirm("First?").unwrap(), Outcome::Value(false));
    assert_eq!(prompter.source_mut().pending(), 1);
    assert_eq!(prompter.confirm("Second?").unwrap(), Outcome::Back);

    let frame = prompter.renderer().last().unwrap();
    assert!(frame.starts_with("Second?"), "got:\n{frame}");

    tx.send(Event::Key(NamedKey::Interrupt)).unwrap();
    assert_eq!(prompter.confirm("Third?").unwrap(), Outcome::Exit);
}
