//! Reactive client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each piece is `Copy` and backed by arena-allocated signals, so components
//! grab it with `expect_context` and move it into event handlers freely.

pub mod announcer;
pub mod modal;
pub mod theme;
