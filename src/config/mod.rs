//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use loader::{
    DEFAULT_MENU_PAGE_SIZE, DEFAULT_MENU_WIDTH, DEFAULT_RESULT_WIDTH, DEFAULT_TEXT_PAGE_HEIGHT,
};

/// Sizes the prompt loops work with.
///
/// Built from a [`ResolvedConfig`] once at startup; page size and text
/// height are guaranteed positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptConfig {
    page_size: usize,
    text_height: usize,
    menu_width: u16,
    result_width: u16,
}

impl PromptConfig {
    /// Create a prompt configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when any size is zero.
    pub fn new(
        page_size: usize,
        text_height: usize,
        menu_width: u16,
        result_width: u16,
    ) -> Result<Self, ConfigError> {
        let zero = |field: &'static str| ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".to_string(),
        };

        if page_size == 0 {
            return Err(zero("menu_page_size"));
        }
        if text_height == 0 {
            return Err(zero("text_page_height"));
        }
        if menu_width == 0 {
            return Err(zero("menu_width"));
        }
        if result_width == 0 {
            return Err(zero("result_width"));
        }

        Ok(Self {
            page_size,
            text_height,
            menu_width,
            result_width,
        })
    }

    /// Validate the sizes of a resolved configuration.
    ///
    /// # Errors
    ///
    /// Same as [`PromptConfig::new`].
    pub fn from_resolved(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.menu_page_size,
            config.text_page_height,
            config.menu_width,
            config.result_width,
        )
    }

    /// Entries per menu page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Lines per text viewer page.
    pub fn text_height(&self) -> usize {
        self.text_height
    }

    /// Width of menus and line prompts.
    pub fn menu_width(&self) -> u16 {
        self.menu_width
    }

    /// Width of the text viewer.
    pub fn result_width(&self) -> u16 {
        self.result_width
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_MENU_PAGE_SIZE,
            text_height: DEFAULT_TEXT_PAGE_HEIGHT,
            menu_width: DEFAULT_MENU_WIDTH,
            result_width: DEFAULT_RESULT_WIDTH,
        }
    }
}
