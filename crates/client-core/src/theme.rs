//! Theme preference
//!
//! Light/dark toggle persisted in the preference store. A failing store
//! degrades to session-only behavior; the page keeps its current theme.

use nasma_metrics_storage::PreferenceStore;

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "dashboard-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Theme state bound to a preference store.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Load the saved theme, defaulting to light when absent, unknown, or
    /// the store is unavailable.
    pub fn new(store: S) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(&value).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme preference unavailable, defaulting to light: {e}");
                Theme::default()
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch themes and persist the choice.
    pub fn toggle(&mut self) -> Theme {
        let next = match self.current {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next);
        next
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("failed to persist theme: {e}");
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
