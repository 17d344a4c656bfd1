//! Boot menu prompt engine (bootmenu)
//!
//! Text-mode prompts for installer and boot-menu flows: a line editor with
//! pluggable validation, a paginated text viewer, a paginated selection list
//! and a yes/no confirmation built on it.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and transitions
//! with no I/O; `source` feeds events in, `view` draws screens out, and
//! `prompt` runs the blocking loops that tie them together.

pub mod config;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
