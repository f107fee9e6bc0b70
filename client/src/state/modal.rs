//! Bridge between the `landing` router and the browser.
//!
//! ARCHITECTURE
//! ============
//! `ModalHost` owns the single `Router` for the page. Components and window
//! listeners translate DOM events into `Command`s and call `dispatch`. The
//! router's phase is mirrored into a signal that drives the `active` classes,
//! and the returned effects are carried out here: history writes, scroll
//! lock, focus, analytics, and fallback timers.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use landing::controller::Phase;
use landing::effect::Effect;
use landing::route::Route;
use landing::router::{Command, Router};
use landing::timing::Timings;
use leptos::prelude::*;

use crate::util::{analytics, dom, history};

#[derive(Clone, Copy)]
pub struct ModalHost {
    router: StoredValue<Router>,
    phase: RwSignal<Phase>,
}

impl ModalHost {
    /// A host for the modals rendered for `routes`.
    pub fn new(timings: Timings, routes: impl IntoIterator<Item = Route>) -> Self {
        Self { router: StoredValue::new(Router::new(timings, routes)), phase: RwSignal::new(Phase::Closed) }
    }

    /// Current phase, tracked by the calling reactive scope.
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn phase_untracked(&self) -> Phase {
        self.phase.get_untracked()
    }

    pub fn timings(&self) -> Timings {
        self.router.try_with_value(Router::timings).unwrap_or_default()
    }

    /// Feed one browser event into the router and carry out what it asks.
    pub fn dispatch(&self, command: Command) {
        let Some(effects) = self.router.try_update_value(|router| router.dispatch(command)) else {
            return;
        };
        if let Some(phase) = self.router.try_with_value(Router::phase) {
            if self.phase.get_untracked() != phase {
                self.phase.set(phase);
            }
        }
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Resolve the page URL once listeners have had time to attach.
    pub fn resolve_initial_route(&self) {
        #[cfg(feature = "csr")]
        {
            let host = *self;
            gloo_timers::callback::Timeout::new(self.timings().initial_route_delay_ms, move || {
                host.dispatch(Command::Initial(history::current_location()));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            self.dispatch(Command::Initial(history::current_location()));
        }
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::LockScroll => dom::lock_scroll(),
            Effect::UnlockScroll => dom::unlock_scroll(),
            Effect::FocusClose(route) => dom::focus_close_control(route),
            Effect::ScheduleSettle { seq, after_ms } => self.schedule_settle(seq, after_ms),
            Effect::Track(event) => analytics::report(&event),
            Effect::PushHistory(entry) => history::push(&entry),
            Effect::ReplaceHistory(entry) => history::replace(&entry),
        }
    }

    fn schedule_settle(&self, seq: u64, after_ms: u32) {
        #[cfg(feature = "csr")]
        {
            let host = *self;
            gloo_timers::callback::Timeout::new(after_ms, move || host.dispatch(Command::SettleTimeout(seq))).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (seq, after_ms);
        }
    }
}
