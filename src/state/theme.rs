//! Light/dark theme resolution, toggle, and persistence.
//!
//! The persisted value is one of the literal strings `"light"` or `"dark"`.
//! Anything else in storage is treated as "no preference" and the system
//! color-scheme signal decides.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::consts::{ICON_MOON, ICON_SUN};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a persisted value. Only the exact literals are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Markup for the toggle button: a sun in light mode, a moon in dark mode.
    #[must_use]
    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Light => ICON_SUN,
            Self::Dark => ICON_MOON,
        }
    }

    /// Resolve the startup theme: saved value, then system signal, then dark.
    #[must_use]
    pub fn resolve_initial(saved: Option<&str>, prefers_light: bool) -> Self {
        if let Some(theme) = saved.and_then(Self::parse) {
            return theme;
        }
        if prefers_light { Self::Light } else { Self::Dark }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value store holding the theme preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// In-memory store, used when `localStorage` is unavailable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub value: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
    }
}

/// Single owner of the current theme and its backing store.
#[derive(Debug)]
pub struct ThemeState<S> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the persisted preference once and resolve the startup theme.
    pub fn load(store: S, prefers_light: bool) -> Self {
        let saved = store.load();
        let current = Theme::resolve_initial(saved.as_deref(), prefers_light);
        Self { current, store }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
