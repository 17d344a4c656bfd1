//! Keyboard bindings configuration.

use crate::config::ConfigError;
use crate::model::NamedKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{BTreeMap, HashMap};

/// Maps terminal key events to named prompt keys.
///
/// Printable characters without Ctrl/Alt are not listed here; the terminal
/// source turns them into character events unless a binding claims them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, NamedKey>,
}

impl KeyBindings {
    /// Look up the named key for a key event.
    ///
    /// Only code and modifiers take part in the lookup; event kind and
    /// keyboard state flags are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<NamedKey> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind a key event, replacing any previous binding for it.
    pub fn insert(&mut self, key: KeyEvent, named: NamedKey) {
        self.bindings
            .insert(KeyEvent::new(key.code, key.modifiers), named);
    }

    /// Number of bound key events.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Default bindings overlaid with `[keybindings]` entries from the config file.
    ///
    /// Each entry maps a key spec (`"ctrl-q"`, `"pgdn"`, `"q"`) to a named key
    /// (`"interrupt"`, `"page_down"`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKeyBinding` for an unparseable spec or an
    /// unknown key name.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut bindings = Self::default();

        for (spec, name) in overrides {
            let key = parse_key_spec(spec).ok_or_else(|| ConfigError::InvalidKeyBinding {
                spec: spec.clone(),
                reason: "unrecognised key".to_string(),
            })?;
            let named = NamedKey::from_name(name).ok_or_else(|| ConfigError::InvalidKeyBinding {
                spec: spec.clone(),
                reason: format!("unknown action '{name}'"),
            })?;
            bindings.insert(key, named);
        }

        Ok(bindings)
    }
}

/// Parse a key spec such as `ctrl-d`, `alt-x`, `pgdn`, `enter` or `q`.
///
/// Modifier prefixes (`ctrl-`, `alt-`, `shift-`) may be combined and are
/// case-insensitive. A single remaining character is a character key.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = spec.trim();

    loop {
        let lower = rest.to_ascii_lowercase();
        let prefix = if lower.starts_with("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            "ctrl-".len()
        } else if lower.starts_with("alt-") {
            modifiers |= KeyModifiers::ALT;
            "alt-".len()
        } else if lower.starts_with("shift-") {
            modifiers |= KeyModifiers::SHIFT;
            "shift-".len()
        } else {
            break;
        };
        rest = &rest[prefix..];
    }

    let code = match rest.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "esc" | "escape" => KeyCode::Esc,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Line editing
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            NamedKey::Enter,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            NamedKey::Backspace,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            NamedKey::Escape,
        );

        // Session exit
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            NamedKey::Interrupt,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            NamedKey::Interrupt,
        );

        // Arrow keys
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            NamedKey::Left,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            NamedKey::Right,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            NamedKey::Up,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            NamedKey::Down,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            NamedKey::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            NamedKey::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            NamedKey::Home,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            NamedKey::End,
        );

        Self { bindings }
    }
}
