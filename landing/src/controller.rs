//! Modal open/close lifecycle.
//!
//! ```text
//! Closed ──open──▶ Opening ──settle──▶ Open ──close──▶ Closing ──settle──▶ Closed
//! ```
//!
//! `Opening` and `Closing` hold the animating lock: `open` and `close` are
//! no-ops while either is active. A transition ends when the host reports
//! `transitionend` for the animating modal in the matching direction or the
//! fallback timer for the current transition fires, whichever comes first.
//! Every transition gets a fresh sequence number, so a timer armed for an
//! earlier transition can never end a later one.
//!
//! The controller refuses to open a second modal while one is open. Moving
//! from one modal to another is the router's job: it closes first and opens
//! once the close has settled.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::analytics::AnalyticsEvent;
use crate::effect::Effect;
use crate::route::Route;
use crate::timing::Timings;

/// Where the controller is in the open/close cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Opening {
        route: Route,
        seq: u64,
    },
    Open {
        route: Route,
    },
    Closing {
        route: Route,
        seq: u64,
    },
}

impl Phase {
    /// The modal this phase concerns, including one that is still closing.
    #[must_use]
    pub fn route(self) -> Option<Route> {
        match self {
            Self::Closed => None,
            Self::Opening { route, .. } | Self::Open { route } | Self::Closing { route, .. } => Some(route),
        }
    }

    /// Whether the animating lock is held.
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening { .. } | Self::Closing { .. })
    }

    /// The modal carrying the `active` class, if any.
    #[must_use]
    pub fn visible(self) -> Option<Route> {
        match self {
            Self::Opening { route, .. } | Self::Open { route } => Some(route),
            Self::Closed | Self::Closing { .. } => None,
        }
    }

    /// Whether `.modal-system` should be shown. It stays up until the close
    /// transition has finished.
    #[must_use]
    pub fn system_active(self) -> bool {
        self != Self::Closed
    }

    /// The modal whose trigger should carry `modal-opening`.
    #[must_use]
    pub fn opening(self) -> Option<Route> {
        match self {
            Self::Opening { route, .. } => Some(route),
            _ => None,
        }
    }
}

/// Why a transition is being reported finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// `transitionend` fired on this modal's container. `shown` is whether
    /// the modal ended up visible, so an opening only settles on a shown end
    /// and a closing only on a hidden one.
    TransitionEnd { route: Route, shown: bool },
    /// The fallback timer armed for transition `seq` fired.
    Timeout(u64),
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    phase: Phase,
    last_seq: u64,
    timings: Timings,
}

impl ModalController {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self { phase: Phase::Closed, last_seq: 0, timings }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Start opening `route`.
    pub fn open(&mut self, route: Route) -> Vec<Effect> {
        if self.phase != Phase::Closed {
            log::debug!("modal open ignored: route={route} phase={:?}", self.phase);
            return Vec::new();
        }
        let seq = self.next_seq();
        self.phase = Phase::Opening { route, seq };
        vec![
            Effect::LockScroll,
            Effect::ScheduleSettle { seq, after_ms: self.timings.open_deadline_ms() },
            Effect::Track(AnalyticsEvent::ModalOpen { modal_id: route.modal_id() }),
        ]
    }

    /// Start closing the open modal. Closing when nothing is open is a no-op.
    pub fn close(&mut self) -> Vec<Effect> {
        let Phase::Open { route } = self.phase else {
            log::debug!("modal close ignored: phase={:?}", self.phase);
            return Vec::new();
        };
        let seq = self.next_seq();
        self.phase = Phase::Closing { route, seq };
        vec![
            Effect::ScheduleSettle { seq, after_ms: self.timings.close_deadline_ms() },
            Effect::Track(AnalyticsEvent::ModalClose { modal_id: route.modal_id() }),
        ]
    }

    /// Finish the current transition if `settle` refers to it.
    pub fn settle(&mut self, settle: Settle) -> Vec<Effect> {
        match self.phase {
            Phase::Opening { route, seq } if Self::matches(settle, route, seq, true) => {
                self.phase = Phase::Open { route };
                vec![Effect::FocusClose(route)]
            }
            Phase::Closing { route, seq } if Self::matches(settle, route, seq, false) => {
                self.phase = Phase::Closed;
                vec![Effect::UnlockScroll]
            }
            phase => {
                log::debug!("stale settle ignored: {settle:?} phase={phase:?}");
                Vec::new()
            }
        }
    }

    fn matches(settle: Settle, route: Route, seq: u64, opening: bool) -> bool {
        match settle {
            Settle::TransitionEnd { route: ended, shown } => ended == route && shown == opening,
            Settle::Timeout(fired) => fired == seq,
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }
}
