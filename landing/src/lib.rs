//! Interaction engine for the link-in-bio landing page.
//!
//! This crate holds every decision the page makes that does not need a
//! browser: which modal a URL names, when a modal may open or close, which
//! history entries to push or replace, which theme to apply, and how links
//! are labelled and tracked. The `client` crate owns the DOM. It feeds
//! browser events in as [`router::Command`]s and executes the
//! [`effect::Effect`]s that come back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`route`] | Route table, URL resolution, history state |
//! | [`controller`] | Modal open/close lifecycle and the animating lock |
//! | [`router`] | Command dispatch and URL/modal reconciliation |
//! | [`effect`] | Side effects returned to the host |
//! | [`timing`] | Transition and deferred-callback timings |
//! | [`theme`] | Light/dark preference resolution |
//! | [`links`] | Link labelling, kinds, and prefetch rules |
//! | [`keyboard`] | Global shortcuts and the modal focus trap |
//! | [`connection`] | Online/offline status reporting |
//! | [`analytics`] | Analytics event payloads |

pub mod analytics;
pub mod connection;
pub mod controller;
pub mod effect;
pub mod error;
pub mod keyboard;
pub mod links;
pub mod route;
pub mod router;
pub mod theme;
pub mod timing;

pub use error::Error;
