//! Prompt state machines (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod editor;
pub mod page_window;
pub mod text_scroll;

// Re-export for convenience
pub use editor::{EditStep, LineEditor};
pub use page_window::PageWindow;
pub use text_scroll::{TextScroll, END_SUFFIX, MORE_SUFFIX};
