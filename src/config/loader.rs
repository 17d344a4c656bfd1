//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Default number of entries per menu page.
pub const DEFAULT_MENU_PAGE_SIZE: usize = 10;

/// Default number of lines per text viewer page.
pub const DEFAULT_TEXT_PAGE_HEIGHT: usize = 18;

/// Default width of menus and line prompts, in columns.
pub const DEFAULT_MENU_WIDTH: u16 = 50;

/// Default width of the text viewer, in columns.
pub const DEFAULT_RESULT_WIDTH: u16 = 70;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BOOTMENU_CONFIG";

/// Environment variable overriding the menu page size.
pub const PAGE_SIZE_ENV_VAR: &str = "BOOTMENU_PAGE_SIZE";

/// Environment variable overriding the text viewer page height.
pub const TEXT_HEIGHT_ENV_VAR: &str = "BOOTMENU_TEXT_HEIGHT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value the prompts cannot work with.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending setting.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A `[keybindings]` entry could not be understood.
    #[error("Invalid key binding '{spec}': {reason}")]
    InvalidKeyBinding {
        /// The key spec as written in the config file.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bootmenu/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Entries per menu page.
    #[serde(default)]
    pub menu_page_size: Option<usize>,

    /// Lines per text viewer page.
    #[serde(default)]
    pub text_page_height: Option<usize>,

    /// Menu and line prompt width in columns.
    #[serde(default)]
    pub menu_width: Option<u16>,

    /// Text viewer width in columns.
    #[serde(default)]
    pub result_width: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Key spec → named key overrides, e.g. `"ctrl-q" = "interrupt"`.
    #[serde(default)]
    pub keybindings: Option<BTreeMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Entries per menu page.
    pub menu_page_size: usize,
    /// Lines per text viewer page.
    pub text_page_height: usize,
    /// Menu and line prompt width.
    pub menu_width: u16,
    /// Text viewer width.
    pub result_width: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides.
    pub keybindings: BTreeMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            menu_page_size: DEFAULT_MENU_PAGE_SIZE,
            text_page_height: DEFAULT_TEXT_PAGE_HEIGHT,
            menu_width: DEFAULT_MENU_WIDTH,
            result_width: DEFAULT_RESULT_WIDTH,
            log_file_path: default_log_path(),
            keybindings: BTreeMap::new(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bootmenu/bootmenu.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bootmenu").join("bootmenu.log")
    } else {
        PathBuf::from("bootmenu.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/bootmenu/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bootmenu").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BOOTMENU_CONFIG` environment variable
/// 3. Default path `~/.config/bootmenu/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BOOTMENU_PAGE_SIZE`: Override menu page size
/// - `BOOTMENU_TEXT_HEIGHT`: Override text viewer page height
///
/// Values that do not parse as a non-negative integer are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(size) = env_usize(PAGE_SIZE_ENV_VAR) {
        config.menu_page_size = size;
    }

    if let Some(height) = env_usize(TEXT_HEIGHT_ENV_VAR) {
        config.text_page_height = height;
    }

    config
}

fn env_usize(var: &str) -> Option<usize> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var, value = %raw, "Ignoring non-numeric environment override");
            None
        }
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        menu_page_size: config.menu_page_size.unwrap_or(defaults.menu_page_size),
        text_page_height: config.text_page_height.unwrap_or(defaults.text_page_height),
        menu_width: config.menu_width.unwrap_or(defaults.menu_width),
        result_width: config.result_width.unwrap_or(defaults.result_width),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
    text_height_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(size) = page_size_override {
        config.menu_page_size = size;
    }

    if let Some(height) = text_height_override {
        config.text_page_height = height;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_bootmenu_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("bootmenu.log"),
            "Default log path should end with 'bootmenu.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/boot.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }
}
