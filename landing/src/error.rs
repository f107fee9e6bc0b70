//! Engine error type.
//!
//! Nothing in the page surfaces these to the visitor. They exist so parsing
//! helpers can report what was wrong and callers can decide to fall back.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown route: {0}")]
    UnknownRoute(String),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("invalid history state: {0}")]
    HistoryState(#[from] serde_json::Error),
}
