//! Prompt rendering (impure shell).
//!
//! The prompt loops describe what to draw with a [`Screen`]; a
//! [`Renderer`] puts it somewhere. [`TerminalRenderer`] draws with ratatui
//! widgets, [`RecordingRenderer`] keeps plain-text frames for tests and
//! scripted runs, [`NullRenderer`] discards everything.

pub mod constants;
mod helpers;
mod input;
mod layout;
mod menu;
pub mod renderer;
pub mod screen;
mod styles;
mod text;

pub use helpers::{count_newlines, paragraph, tail_to_width, text_rows, truncate_to_width};
pub use input::{input_region, InputBox};
pub use layout::{centered_rect, render_screen};
pub use menu::MenuList;
pub use renderer::{NullRenderer, RecordingRenderer, Renderer, TerminalRenderer};
pub use screen::{InputScreen, MenuItem, MenuScreen, Screen, TextScreen};
pub use styles::{ColorConfig, PromptStyles};
pub use text::TextPage;
