//! Transition and deferred-callback timings.
//!
//! The CSS owns the real transition lengths. These values must match it: the
//! host waits for `transitionend` and arms a fallback timer of
//! `duration + settle_grace_ms` in case the event never arrives. A grace of
//! zero gives plain fixed-delay behaviour.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use serde::{Deserialize, Serialize};

/// Length of the modal open transition.
pub const OPEN_TRANSITION_MS: u32 = 150;
/// Length of the modal close transition.
pub const CLOSE_TRANSITION_MS: u32 = 200;
/// Extra time allowed for `transitionend` before the fallback timer fires.
pub const SETTLE_GRACE_MS: u32 = 50;
/// Delay before the initial URL is resolved, so listeners are attached first.
pub const INITIAL_ROUTE_DELAY_MS: u32 = 100;
/// How long a screen-reader announcement stays in the live region.
pub const ANNOUNCE_CLEAR_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub open_ms: u32,
    pub close_ms: u32,
    pub settle_grace_ms: u32,
    pub initial_route_delay_ms: u32,
    pub announce_clear_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            open_ms: OPEN_TRANSITION_MS,
            close_ms: CLOSE_TRANSITION_MS,
            settle_grace_ms: SETTLE_GRACE_MS,
            initial_route_delay_ms: INITIAL_ROUTE_DELAY_MS,
            announce_clear_ms: ANNOUNCE_CLEAR_MS,
        }
    }
}

impl Timings {
    /// Fallback deadline for an opening modal.
    #[must_use]
    pub fn open_deadline_ms(&self) -> u32 {
        self.open_ms.saturating_add(self.settle_grace_ms)
    }

    /// Fallback deadline for a closing modal.
    #[must_use]
    pub fn close_deadline_ms(&self) -> u32 {
        self.close_ms.saturating_add(self.settle_grace_ms)
    }
}
