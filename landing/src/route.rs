//! Route table and URL resolution.
//!
//! The page knows three routes, each bound to one modal. Path routes
//! (`/about`) are canonical. Hash routes (`#about`) are accepted as input and
//! rewritten to the path form. The legacy `/connect` path never opens
//! anything and is always redirected to `/`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Path of the landing page itself.
pub const ROOT_PATH: &str = "/";

/// Retired path segment that redirects to [`ROOT_PATH`].
pub const LEGACY_CONNECT: &str = "connect";

/// A route that maps one-to-one onto a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    About,
    Mission,
    Contact,
}

impl Route {
    /// Every route, in menu order.
    pub const ALL: [Route; 3] = [Route::About, Route::Mission, Route::Contact];

    /// The bare route name, as it appears in paths, hashes, and `data-modal`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Mission => "mission",
            Self::Contact => "contact",
        }
    }

    /// Canonical path, e.g. `/about`.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.as_str())
    }

    /// DOM id of the modal container, e.g. `modal-about`.
    #[must_use]
    pub fn modal_id(self) -> String {
        format!("modal-{}", self.as_str())
    }

    /// Look up a route by its bare name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.as_str() == name)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| Error::UnknownRoute(s.to_owned()))
    }
}

/// The parts of `window.location` the router reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// `location.pathname`, including the leading slash.
    pub pathname: String,
    /// `location.hash`, including the leading `#` when present.
    pub hash: String,
}

impl Location {
    #[must_use]
    pub fn new(pathname: impl Into<String>, hash: impl Into<String>) -> Self {
        Self { pathname: pathname.into(), hash: hash.into() }
    }

    /// The path with its leading and trailing slashes removed.
    #[must_use]
    pub fn path_segment(&self) -> &str {
        self.pathname.trim_start_matches('/').trim_end_matches('/')
    }

    /// The hash without its leading `#`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.hash.trim_start_matches('#')
    }
}

/// Which part of the URL wins when both path and hash name a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Initial load and history traversal.
    Path,
    /// A hash edit is the newest intent, so it outranks the path.
    Hash,
}

/// What a URL asks the page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// The path names a route; already canonical.
    Path(Route),
    /// The hash names a route; the address bar should be rewritten.
    Hash(Route),
    /// The legacy `/connect` path.
    LegacyRedirect,
    /// Anything else: no modal.
    Home,
}

impl Resolved {
    /// The route to show, if any.
    #[must_use]
    pub fn route(self) -> Option<Route> {
        match self {
            Self::Path(route) | Self::Hash(route) => Some(route),
            Self::LegacyRedirect | Self::Home => None,
        }
    }
}

/// Resolve a location against the route table.
#[must_use]
pub fn resolve(location: &Location, precedence: Precedence) -> Resolved {
    let segment = location.path_segment();
    if segment == LEGACY_CONNECT {
        return Resolved::LegacyRedirect;
    }

    let from_path = Route::lookup(segment);
    let from_hash = Route::lookup(location.fragment());

    match (precedence, from_path, from_hash) {
        (Precedence::Hash, _, Some(route)) | (Precedence::Path, None, Some(route)) => Resolved::Hash(route),
        (_, Some(route), _) => Resolved::Path(route),
        (_, None, None) => Resolved::Home,
    }
}

/// The state object stored with each history entry: `{ "modal": "about" }`
/// or `{ "modal": null }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub modal: Option<Route>,
}

impl HistoryState {
    /// Encode as the JSON handed to `history.pushState`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HistoryState`] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A history entry to push or replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub state: HistoryState,
}

impl HistoryEntry {
    /// The bare landing page.
    #[must_use]
    pub fn home() -> Self {
        Self { path: ROOT_PATH.to_owned(), state: HistoryState::default() }
    }

    /// The canonical entry for a route.
    #[must_use]
    pub fn for_route(route: Route) -> Self {
        Self { path: route.path(), state: HistoryState { modal: Some(route) } }
    }
}
