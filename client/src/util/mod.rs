//! Browser glue shared across the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every web-sys call lives here, behind `#[cfg(feature = "csr")]`, with a
//! no-op branch for native builds. Components and state stay free of
//! browser plumbing and can be compiled and tested off the browser.

pub mod analytics;
pub mod dom;
pub mod history;
pub mod markdown;
pub mod observers;
pub mod page;
pub mod theme;
