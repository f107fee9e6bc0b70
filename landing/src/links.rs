//! Link labelling and prefetch rules.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Visual style of a link item, reported to analytics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    #[default]
    TextLink,
    ImageCard,
}

impl LinkKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextLink => "text_link",
            Self::ImageCard => "image_card",
        }
    }
}

/// Label used when a link has no visible text.
pub const UNKNOWN_LINK_LABEL: &str = "Unknown Link";

/// Build the `aria-label` for a link item.
///
/// `text - description (opens in new tab) (image link)`, omitting the parts
/// that do not apply.
#[must_use]
pub fn aria_label(text: &str, description: &str, external: bool, kind: LinkKind) -> String {
    let mut label = text.trim().to_owned();
    let description = description.trim();
    if !description.is_empty() {
        label.push_str(" - ");
        label.push_str(description);
    }
    if external {
        label.push_str(" (opens in new tab)");
    }
    if kind == LinkKind::ImageCard {
        label.push_str(" (image link)");
    }
    label
}

/// The label reported to analytics for a click.
#[must_use]
pub fn tracking_label(text: &str) -> &str {
    let text = text.trim();
    if text.is_empty() { UNKNOWN_LINK_LABEL } else { text }
}

/// Whether hovering this link should add a `<link rel="prefetch">` hint.
#[must_use]
pub fn should_prefetch(url: &str) -> bool {
    url.starts_with("http") && !url.contains("mailto:")
}

/// `tabindex` for the link at `position`, after every social icon.
///
/// Social icons take `1..=social_count`, links follow.
#[must_use]
pub fn link_tab_index(social_count: usize, position: usize) -> usize {
    social_count + position + 1
}

/// `tabindex` for the social icon at `position`.
#[must_use]
pub fn social_tab_index(position: usize) -> usize {
    position + 1
}

/// The element id an in-page `#fragment` link scrolls to.
///
/// `None` for anything that is not a bare fragment, and for fragments naming
/// a modal route, which must reach `hashchange` instead.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty() && Route::lookup(id).is_none()).then_some(id)
}
