//! Prompt styling configuration.
//!
//! Distinct styles for titles, the input line, error lines, default
//! markers and the dimmed footer/hint lines.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PromptStyles =====

/// Styles used by the prompt widgets.
///
/// With colors disabled only modifiers (bold, dim, reversed) remain, so the
/// prompts stay legible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStyles {
    /// Prompt title and menu message.
    pub title: Style,
    /// The line being edited.
    pub input: Style,
    /// Validation error beneath the input.
    pub error: Style,
    /// The ` (default)` marker after a label.
    pub default_marker: Style,
    /// Entry numbers in menus.
    pub number: Style,
    /// `(More)` / `(End of message)`, page indicator and key hints.
    pub footer: Style,
    /// Box borders.
    pub border: Style,
}

impl PromptStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                input: Style::default().fg(Color::White),
                error: Style::default().fg(Color::Red),
                default_marker: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
                number: Style::default().fg(Color::Green),
                footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                border: Style::default().fg(Color::White),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                input: Style::default(),
                error: Style::default().add_modifier(Modifier::REVERSED),
                default_marker: Style::default().add_modifier(Modifier::ITALIC),
                number: Style::default(),
                footer: Style::default().add_modifier(Modifier::DIM),
                border: Style::default(),
            }
        }
    }
}

impl Default for PromptStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_no_color_env_any_value_disables() {
        // NO_COLOR can be any value (even empty string)
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR with empty string should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            config.colors_enabled(),
            "Colors should be enabled by default"
        );
    }

    #[test]
    fn monochrome_styles_carry_no_colors() {
        let config = ColorConfig::from_env_and_args(true);
        let styles = PromptStyles::with_color_config(config);
        for style in [
            styles.title,
            styles.input,
            styles.error,
            styles.default_marker,
            styles.number,
            styles.footer,
            styles.border,
        ] {
            assert_eq!(style.fg, None, "No foreground color expected: {style:?}");
        }
        assert!(styles.error.add_modifier.contains(Modifier::REVERSED));
    }
}
