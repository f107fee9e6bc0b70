//! Site content and timing configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is static: profile, links, and modal copy ship inside the WASM
//! bundle as `content/site.json`. Parsing happens once at startup; a broken
//! file falls back to a bare profile so the page still renders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use landing::links::LinkKind;
use landing::route::Route;
use landing::timing::Timings;
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has no links")]
    NoLinks,
    #[error("link {title:?} has an empty url")]
    EmptyUrl { title: String },
    #[error("no modal content for route {0}")]
    MissingModal(Route),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub links: Vec<LinkItem>,
    pub modals: Vec<ModalContent>,
    #[serde(default)]
    pub timings: Timings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    pub avatar_light: String,
    pub avatar_dark: String,
    #[serde(default)]
    pub avatar_alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Opens in a new tab.
    #[serde(default)]
    pub external: bool,
}

impl LinkItem {
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        if self.image.is_some() { LinkKind::ImageCard } else { LinkKind::TextLink }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalContent {
    pub route: Route,
    pub title: String,
    /// Markdown.
    pub body: String,
    #[serde(default)]
    pub menu_label: Option<String>,
}

impl ModalContent {
    /// Text of the menu trigger; defaults to the modal title.
    #[must_use]
    pub fn label(&self) -> &str {
        self.menu_label.as_deref().unwrap_or(&self.title)
    }
}

impl SiteConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed, there are no
    /// links, a link has no URL, or a route has no modal content.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The config compiled into the bundle, or a bare fallback if it is
    /// invalid.
    #[must_use]
    pub fn load() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("site config rejected, using fallback: {e}");
                Self::fallback()
            }
        }
    }

    /// Minimal config used when the embedded one cannot be read.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            profile: Profile {
                name: String::new(),
                tagline: String::new(),
                avatar_light: String::new(),
                avatar_dark: String::new(),
                avatar_alt: String::new(),
            },
            socials: Vec::new(),
            links: Vec::new(),
            modals: Vec::new(),
            timings: Timings::default(),
        }
    }

    #[must_use]
    pub fn modal(&self, route: Route) -> Option<&ModalContent> {
        self.modals.iter().find(|m| m.route == route)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.links.is_empty() {
            return Err(ConfigError::NoLinks);
        }
        if let Some(link) = self.links.iter().find(|l| l.url.trim().is_empty()) {
            return Err(ConfigError::EmptyUrl { title: link.title.clone() });
        }
        if let Some(route) = Route::ALL.into_iter().find(|r| self.modal(*r).is_none()) {
            return Err(ConfigError::MissingModal(route));
        }
        Ok(())
    }
}
