//! Dark-mode preference. Each page keeps its own flag under its own storage key.

use dioxus::logger::tracing::warn;

use super::storage;

pub const ENABLED: &str = "enabled";
pub const DISABLED: &str = "disabled";
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub key: &'static str,
    pub dark: bool,
}

impl ThemePreference {
    pub fn load(key: &'static str) -> Self {
        let dark = storage::get_item(key).as_deref() == Some(ENABLED);
        Self { key, dark }
    }

    /// Flip and persist. A failed write still flips the in-memory state.
    pub fn toggled(self) -> Self {
        let next = Self {
            key: self.key,
            dark: !self.dark,
        };
        let value = if next.dark { ENABLED } else { DISABLED };
        if let Err(err) = storage::set_item(self.key, value) {
            warn!(key = self.key, "theme preference not saved: {err}");
        }
        next
    }

    pub fn body_class(&self) -> &'static str {
        if self.dark {
            DARK_CLASS
        } else {
            ""
        }
    }

    /// Icon shown on the toggle: a sun while dark (click for light) and a moon otherwise.
    pub fn toggle_icon(&self) -> &'static str {
        if self.dark {
            "☀"
        } else {
            "☾"
        }
    }
}
