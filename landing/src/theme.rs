//! Light/dark theme preference.
//!
//! An explicit choice stored under [`STORAGE_KEY`] always wins. Without one
//! the page follows the OS colour scheme and keeps following it as it
//! changes. With no OS signal either, the page is dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Local-storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Media query consulted when nothing is stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
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

    /// Accessible label for the toggle: what activating it would do.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Parse a stored value; anything unrecognised counts as "no preference".
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Option<Self> {
        match stored? {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Pick the theme to apply at startup.
    #[must_use]
    pub fn resolve(stored: Option<&str>, os_prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = Self::from_stored(stored) {
            return theme;
        }
        match os_prefers_dark {
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
            None => Self::default(),
        }
    }

    /// Theme to switch to after an OS colour-scheme change, or `None` when an
    /// explicit preference pins the current theme.
    #[must_use]
    pub fn on_os_change(stored: Option<&str>, os_prefers_dark: bool) -> Option<Self> {
        if Self::from_stored(stored).is_some() {
            return None;
        }
        Some(if os_prefers_dark { Self::Dark } else { Self::Light })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stored(Some(s)).ok_or_else(|| Error::UnknownTheme(s.to_owned()))
    }
}
