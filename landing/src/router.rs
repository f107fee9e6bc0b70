//! URL router: keeps the address bar, the history stack, and the modal in
//! agreement.
//!
//! DESIGN
//! ======
//! Every browser event the page cares about arrives as a [`Command`]. The
//! router tracks the modal the URL currently asks for (`desired`) and, after
//! each command, nudges the [`ModalController`] one step toward it. Because
//! the controller ignores work while its animating lock is held, and every
//! settled transition triggers another reconciliation step, a burst of
//! back/forward presses always converges on the last URL visited without
//! any queue.
//!
//! History writes follow who started the change:
//! - visitor clicks push (`/{route}` on open, `/` on close);
//! - redirects and hash canonicalisation replace;
//! - popstate and hashchange only reflect the URL and never push.
//!
//! A route whose modal is not on the page resolves like an unknown URL.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::controller::{ModalController, Phase, Settle};
use crate::effect::Effect;
use crate::route::{HistoryEntry, Location, Precedence, Resolved, Route, resolve};
use crate::timing::Timings;

/// How the visitor asked to close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSource {
    Button,
    Overlay,
    Escape,
}

/// Browser events, translated by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The page finished loading at this location.
    Initial(Location),
    /// `popstate` fired; the location is the one navigated to.
    PopState(Location),
    /// `hashchange` fired.
    HashChange(Location),
    /// A `.menu-item[data-modal]` trigger was clicked.
    TriggerClicked(Route),
    /// Close button, overlay click, or Escape.
    CloseRequested(CloseSource),
    /// `transitionend` fired on a modal container; `shown` is whether the
    /// modal ended the transition visible.
    TransitionEnd { route: Route, shown: bool },
    /// The fallback timer for transition `seq` fired.
    SettleTimeout(u64),
}

#[derive(Debug, Clone)]
pub struct Router {
    controller: ModalController,
    desired: Option<Route>,
    /// Routes whose modal is actually on the page.
    available: Vec<Route>,
}

impl Router {
    /// A router for the modals in `available`. URLs naming any other route
    /// are treated like unknown URLs: no modal.
    #[must_use]
    pub fn new(timings: Timings, available: impl IntoIterator<Item = Route>) -> Self {
        Self { controller: ModalController::new(timings), desired: None, available: available.into_iter().collect() }
    }

    /// Whether `route` has a modal to show.
    #[must_use]
    pub fn is_available(&self, route: Route) -> bool {
        self.available.contains(&route)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// The modal the current URL asks for.
    #[must_use]
    pub fn desired(&self) -> Option<Route> {
        self.desired
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.controller.timings()
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Initial(location) => self.on_initial(&location),
            Command::PopState(location) => self.on_pop_state(&location),
            Command::HashChange(location) => self.on_hash_change(&location),
            Command::TriggerClicked(route) => self.open_from_visitor(route),
            Command::CloseRequested(source) => self.close_from_visitor(source),
            Command::TransitionEnd { route, shown } => self.settle(Settle::TransitionEnd { route, shown }),
            Command::SettleTimeout(seq) => self.settle(Settle::Timeout(seq)),
        }
    }

    /// Resolve `location`, treating routes without a modal as unknown.
    fn resolve_location(&self, location: &Location, precedence: Precedence) -> Resolved {
        match resolve(location, precedence) {
            Resolved::Path(route) | Resolved::Hash(route) if !self.is_available(route) => {
                log::debug!("route has no modal on this page: {route}");
                Resolved::Home
            }
            resolved => resolved,
        }
    }

    fn on_initial(&mut self, location: &Location) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.resolve_location(location, Precedence::Path) {
            Resolved::Path(route) => {
                // `/about#contact`: the path wins, drop the stray hash.
                if !location.fragment().is_empty() {
                    effects.push(Effect::ReplaceHistory(HistoryEntry::for_route(route)));
                }
                self.desired = Some(route);
            }
            Resolved::Hash(route) => {
                effects.push(Effect::ReplaceHistory(HistoryEntry::for_route(route)));
                self.desired = Some(route);
            }
            Resolved::LegacyRedirect => {
                effects.push(Effect::ReplaceHistory(HistoryEntry::home()));
                self.desired = None;
            }
            Resolved::Home => self.desired = None,
        }
        effects.extend(self.reconcile());
        effects
    }

    fn on_pop_state(&mut self, location: &Location) -> Vec<Effect> {
        let mut effects = Vec::new();
        let resolved = self.resolve_location(location, Precedence::Path);
        if resolved == Resolved::LegacyRedirect {
            effects.push(Effect::ReplaceHistory(HistoryEntry::home()));
        }
        self.desired = resolved.route();
        effects.extend(self.reconcile());
        effects
    }

    fn on_hash_change(&mut self, location: &Location) -> Vec<Effect> {
        let mut effects = Vec::new();
        let resolved = self.resolve_location(location, Precedence::Hash);
        match resolved {
            Resolved::Hash(route) => effects.push(Effect::ReplaceHistory(HistoryEntry::for_route(route))),
            Resolved::LegacyRedirect => effects.push(Effect::ReplaceHistory(HistoryEntry::home())),
            Resolved::Path(_) | Resolved::Home => {}
        }
        self.desired = resolved.route();
        effects.extend(self.reconcile());
        effects
    }

    fn open_from_visitor(&mut self, route: Route) -> Vec<Effect> {
        let phase = self.controller.phase();
        if phase.is_animating() || phase.visible() == Some(route) || !self.is_available(route) {
            log::debug!("trigger ignored: route={route} phase={phase:?}");
            return Vec::new();
        }
        self.desired = Some(route);
        let mut effects = vec![Effect::PushHistory(HistoryEntry::for_route(route))];
        effects.extend(self.reconcile());
        effects
    }

    fn close_from_visitor(&mut self, source: CloseSource) -> Vec<Effect> {
        let phase = self.controller.phase();
        if !matches!(phase, Phase::Open { .. }) {
            log::debug!("close ignored: source={source:?} phase={phase:?}");
            return Vec::new();
        }
        self.desired = None;
        let mut effects = vec![Effect::PushHistory(HistoryEntry::home())];
        effects.extend(self.reconcile());
        effects
    }

    fn settle(&mut self, settle: Settle) -> Vec<Effect> {
        let mut effects = self.controller.settle(settle);
        effects.extend(self.reconcile());
        effects
    }

    /// Take one step from the controller's state toward `desired`.
    fn reconcile(&mut self) -> Vec<Effect> {
        match (self.controller.phase(), self.desired) {
            (phase, _) if phase.is_animating() => Vec::new(),
            (Phase::Closed, Some(route)) => self.controller.open(route),
            (Phase::Open { route }, desired) if desired != Some(route) => {
                log::debug!("reconcile: closing {route} for {desired:?}");
                self.controller.close()
            }
            _ => Vec::new(),
        }
    }
}
