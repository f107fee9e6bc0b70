//! Theme state shared by the toggle and the avatar.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use landing::theme::Theme;

use crate::config::Profile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The avatar asset matching the current theme.
    #[must_use]
    pub fn avatar<'a>(&self, profile: &'a Profile) -> &'a str {
        match self.theme {
            Theme::Light => &profile.avatar_light,
            Theme::Dark => &profile.avatar_dark,
        }
    }
}
