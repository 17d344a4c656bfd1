//! Layout dimension constants for prompt rendering.
//!
//! Centralized location for layout-related values so the widgets and the
//! height calculations agree.

/// Rows taken by a full border (top + bottom).
pub const BORDER_ROWS: u16 = 2;

/// Columns taken by a full border (left + right).
pub const BORDER_COLUMNS: u16 = 2;

/// Prefix drawn before the line being edited.
pub const INPUT_PREFIX: &str = "> ";

/// Rows of an input box below the title: input line and error line.
pub const INPUT_BODY_ROWS: u16 = 2;

/// Key hint shown at the bottom of menus.
pub const MENU_HINT: &str = "PgUp/PgDn: page  Enter: select  Esc: back";

/// Key hint shown at the bottom of the text viewer.
pub const TEXT_HINT: &str = "PgUp/PgDn: scroll  Esc: close";

/// Suffix appended to the label of a default entry.
pub const DEFAULT_SUFFIX: &str = " (default)";
