//! Online/offline reporting.

use serde::{Deserialize, Serialize};

/// Message announced to screen readers when the page goes offline.
pub const OFFLINE_ANNOUNCEMENT: &str = "You are currently offline. Some links may not work.";

/// Value of the `data-connection` attribute on `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    #[default]
    Online,
    Offline,
}

impl Connection {
    #[must_use]
    pub fn from_online(online: bool) -> Self {
        if online { Self::Online } else { Self::Offline }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// What to announce after switching to this status, if anything.
    #[must_use]
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            Self::Online => None,
            Self::Offline => Some(OFFLINE_ANNOUNCEMENT),
        }
    }
}
