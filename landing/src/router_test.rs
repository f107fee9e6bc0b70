use super::*;
use crate::analytics::AnalyticsEvent;
use crate::route::HistoryState;

// =============================================================
// Helpers
// =============================================================

/// Minimal browser stand-in: tracks the address bar and history stack the
/// way `pushState`/`replaceState` would, and replays settle timers on demand.
struct Harness {
    router: Router,
    stack: Vec<HistoryEntry>,
    index: usize,
    timers: Vec<u64>,
    focused: Option<Route>,
    scroll_locked: bool,
    tracked: Vec<&'static str>,
}

impl Harness {
    fn at(path: &str) -> Self {
        Self::with_modals(path, Route::ALL)
    }

    /// A page that only renders the modals in `routes`.
    fn with_modals(path: &str, routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            router: Router::new(Timings::default(), routes),
            stack: vec![HistoryEntry { path: path.to_owned(), state: HistoryState::default() }],
            index: 0,
            timers: Vec::new(),
            focused: None,
            scroll_locked: false,
            tracked: Vec::new(),
        }
    }

    fn address(&self) -> &str {
        &self.stack[self.index].path
    }

    fn run(&mut self, command: Command) -> Vec<Effect> {
        let effects = self.router.dispatch(command);
        for effect in &effects {
            match effect {
                Effect::PushHistory(entry) => {
                    self.stack.truncate(self.index + 1);
                    self.stack.push(entry.clone());
                    self.index += 1;
                }
                Effect::ReplaceHistory(entry) => self.stack[self.index] = entry.clone(),
                Effect::ScheduleSettle { seq, .. } => self.timers.push(*seq),
                Effect::FocusClose(route) => self.focused = Some(*route),
                Effect::LockScroll => self.scroll_locked = true,
                Effect::UnlockScroll => self.scroll_locked = false,
                Effect::Track(event) => self.tracked.push(event.name()),
            }
        }
        effects
    }

    fn load(&mut self, hash: &str) -> Vec<Effect> {
        let location = Location::new(self.address(), hash);
        self.run(Command::Initial(location))
    }

    /// Fire every pending fallback timer, including ones armed while firing.
    fn elapse(&mut self) {
        while !self.timers.is_empty() {
            let due = std::mem::take(&mut self.timers);
            for seq in due {
                self.run(Command::SettleTimeout(seq));
            }
        }
    }

    fn back(&mut self) -> Vec<Effect> {
        self.index -= 1;
        let location = Location::new(self.address(), "");
        self.run(Command::PopState(location))
    }

    fn forward(&mut self) -> Vec<Effect> {
        self.index += 1;
        let location = Location::new(self.address(), "");
        self.run(Command::PopState(location))
    }

    fn edit_hash(&mut self, hash: &str) -> Vec<Effect> {
        let path = self.address().to_owned();
        self.stack.truncate(self.index + 1);
        self.stack.push(HistoryEntry { path: path.clone(), state: HistoryState::default() });
        self.index += 1;
        self.run(Command::HashChange(Location::new(path, hash)))
    }

    fn visible(&self) -> Option<Route> {
        self.router.phase().visible()
    }

    fn pushes(effects: &[Effect]) -> usize {
        effects.iter().filter(|e| matches!(e, Effect::PushHistory(_))).count()
    }
}

// =============================================================
// Initial route
// =============================================================

#[test]
fn initial_path_route_opens_modal_without_touching_history() {
    for route in Route::ALL {
        let mut h = Harness::at(&route.path());
        let effects = h.load("");
        assert!(!effects.iter().any(|e| matches!(e, Effect::PushHistory(_) | Effect::ReplaceHistory(_))));
        h.elapse();
        assert_eq!(h.visible(), Some(route));
        assert_eq!(h.address(), route.path());
        assert_eq!(h.focused, Some(route));
    }
}

#[test]
fn initial_hash_route_is_canonicalised_by_replace() {
    for route in Route::ALL {
        let mut h = Harness::at("/");
        h.load(&format!("#{route}"));
        h.elapse();
        assert_eq!(h.stack.len(), 1, "hash canonicalisation must not push");
        assert_eq!(h.address(), route.path());
        assert_eq!(h.stack[0].state.modal, Some(route));
        assert_eq!(h.visible(), Some(route));
    }
}

#[test]
fn initial_connect_redirects_home_by_replace() {
    let mut h = Harness::at("/connect");
    let effects = h.load("");
    assert_eq!(effects, vec![Effect::ReplaceHistory(HistoryEntry::home())]);
    assert_eq!(h.address(), "/");
    assert_eq!(h.stack.len(), 1);
    assert_eq!(h.router.phase(), Phase::Closed);
}

#[test]
fn initial_path_route_drops_a_stray_hash() {
    let mut h = Harness::at("/about");
    let effects = h.load("#contact");
    assert_eq!(effects[0], Effect::ReplaceHistory(HistoryEntry::for_route(Route::About)));
    assert_eq!(Harness::pushes(&effects), 0);
    assert_eq!(h.stack.len(), 1);
    h.elapse();
    assert_eq!(h.address(), "/about");
    assert_eq!(h.visible(), Some(Route::About));
}

#[test]
fn initial_unknown_path_opens_nothing() {
    let mut h = Harness::at("/blog");
    assert!(h.load("#also-unknown").is_empty());
    assert_eq!(h.router.phase(), Phase::Closed);
    assert_eq!(h.address(), "/blog");
}

// =============================================================
// Visitor-initiated open/close
// =============================================================

#[test]
fn clicking_mission_pushes_and_focuses_close_control() {
    let mut h = Harness::at("/");
    h.load("");
    let effects = h.run(Command::TriggerClicked(Route::Mission));
    assert_eq!(effects[0], Effect::PushHistory(HistoryEntry::for_route(Route::Mission)));
    assert_eq!(h.address(), "/mission");
    assert_eq!(h.visible(), Some(Route::Mission));
    assert!(h.scroll_locked);

    h.run(Command::TransitionEnd { route: Route::Mission, shown: true });
    assert_eq!(h.focused, Some(Route::Mission));
    assert!(!h.router.phase().is_animating());
    assert_eq!(h.tracked, vec!["modal_open"]);
}

#[test]
fn every_close_source_returns_home_with_a_push() {
    for source in [CloseSource::Button, CloseSource::Overlay, CloseSource::Escape] {
        let mut h = Harness::at("/");
        h.run(Command::TriggerClicked(Route::About));
        h.elapse();

        let effects = h.run(Command::CloseRequested(source));
        assert_eq!(Harness::pushes(&effects), 1);
        assert_eq!(h.address(), "/");
        assert_eq!(h.visible(), None);
        assert!(h.router.phase().system_active(), "modal system stays up until the close settles");

        h.elapse();
        assert_eq!(h.router.phase(), Phase::Closed);
        assert!(!h.scroll_locked);
        assert_eq!(h.stack.len(), 3);
    }
}

#[test]
fn close_requests_with_nothing_open_do_nothing() {
    let mut h = Harness::at("/");
    assert!(h.run(Command::CloseRequested(CloseSource::Escape)).is_empty());
    assert_eq!(h.stack.len(), 1);
}

#[test]
fn triggers_and_closes_while_animating_are_ignored() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::About));
    assert!(h.run(Command::TriggerClicked(Route::Contact)).is_empty());
    assert!(h.run(Command::CloseRequested(CloseSource::Escape)).is_empty());
    assert_eq!(h.stack.len(), 2);
    assert_eq!(h.visible(), Some(Route::About));
}

#[test]
fn clicking_the_open_modal_trigger_again_does_not_push() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::About));
    h.elapse();
    assert!(h.run(Command::TriggerClicked(Route::About)).is_empty());
    assert_eq!(h.stack.len(), 2);
}

#[test]
fn reopen_round_trip_matches_fresh_open() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::Contact));
    h.elapse();
    h.run(Command::CloseRequested(CloseSource::Button));
    h.elapse();
    h.run(Command::TriggerClicked(Route::Contact));
    h.elapse();

    let mut fresh = Harness::at("/");
    fresh.run(Command::TriggerClicked(Route::Contact));
    fresh.elapse();

    assert_eq!(h.router.phase(), fresh.router.phase());
    assert_eq!(h.router.desired(), fresh.router.desired());
    assert_eq!(h.address(), fresh.address());
    assert_eq!(h.scroll_locked, fresh.scroll_locked);
}

// =============================================================
// popstate / hashchange
// =============================================================

#[test]
fn back_from_mission_closes_without_pushing() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::Mission));
    h.elapse();

    let effects = h.back();
    assert_eq!(Harness::pushes(&effects), 0);
    assert_eq!(h.address(), "/");
    assert_eq!(h.visible(), None);
    h.elapse();
    assert_eq!(h.router.phase(), Phase::Closed);
    assert_eq!(h.stack.len(), 2, "forward entry is kept");
}

#[test]
fn forward_reopens_without_pushing() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::Mission));
    h.elapse();
    h.back();
    h.elapse();

    let effects = h.forward();
    assert_eq!(Harness::pushes(&effects), 0);
    h.elapse();
    assert_eq!(h.visible(), Some(Route::Mission));
    assert_eq!(h.address(), "/mission");
}

#[test]
fn hash_edit_switches_modals_in_sequence() {
    let mut h = Harness::at("/about");
    h.load("");
    h.elapse();
    assert_eq!(h.visible(), Some(Route::About));

    let effects = h.edit_hash("#contact");
    assert!(effects.contains(&Effect::ReplaceHistory(HistoryEntry::for_route(Route::Contact))));
    assert_eq!(h.address(), "/contact");
    // About is closing; contact must not open until that settles.
    assert_eq!(h.router.phase().route(), Some(Route::About));
    assert_eq!(h.visible(), None);
    assert!(!effects.iter().any(|e| matches!(e, Effect::LockScroll)));

    h.run(Command::TransitionEnd { route: Route::About, shown: false });
    assert_eq!(h.visible(), Some(Route::Contact));
    h.elapse();
    assert_eq!(h.router.phase(), Phase::Open { route: Route::Contact });
    assert_eq!(h.address(), "/contact");
    assert_eq!(h.focused, Some(Route::Contact));
}

#[test]
fn popstate_to_different_modal_closes_first() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::About));
    h.elapse();
    h.run(Command::CloseRequested(CloseSource::Button));
    h.elapse();
    h.run(Command::TriggerClicked(Route::Mission));
    h.elapse();

    // Jump two entries back, straight from /mission to /about.
    h.index = 1;
    let effects = h.run(Command::PopState(Location::new("/about", "")));
    assert!(matches!(h.router.phase(), Phase::Closing { route: Route::Mission, .. }));
    assert!(!effects.iter().any(|e| matches!(e, Effect::Track(AnalyticsEvent::ModalOpen { .. }))));
    h.elapse();
    assert_eq!(h.router.phase(), Phase::Open { route: Route::About });
}

#[test]
fn popstate_to_connect_replaces_with_home() {
    let mut h = Harness::at("/");
    let effects = h.run(Command::PopState(Location::new("/connect", "")));
    assert_eq!(effects, vec![Effect::ReplaceHistory(HistoryEntry::home())]);
    assert_eq!(h.address(), "/");
}

#[test]
fn hashchange_to_unknown_hash_on_root_closes() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::About));
    h.elapse();
    h.run(Command::HashChange(Location::new("/", "#nothing")));
    h.elapse();
    assert_eq!(h.router.phase(), Phase::Closed);
}

// =============================================================
// Rapid navigation
// =============================================================

#[test]
fn rapid_back_and_forward_converge_on_last_location() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::About));
    h.elapse();

    // Back, forward, back again before any transition settles.
    h.back();
    h.forward();
    h.back();
    h.elapse();
    assert_eq!(h.address(), "/");
    assert_eq!(h.router.phase(), Phase::Closed);

    h.forward();
    h.back();
    h.forward();
    h.elapse();
    assert_eq!(h.address(), "/about");
    assert_eq!(h.router.phase(), Phase::Open { route: Route::About });
}

#[test]
fn at_most_one_modal_visible_through_a_busy_session() {
    let mut h = Harness::at("/");
    let commands = [
        Command::TriggerClicked(Route::About),
        Command::HashChange(Location::new("/about", "#mission")),
        Command::PopState(Location::new("/contact", "")),
        Command::TransitionEnd { route: Route::About, shown: false },
        Command::TriggerClicked(Route::Mission),
        Command::SettleTimeout(99),
        Command::CloseRequested(CloseSource::Overlay),
    ];
    for command in commands {
        h.run(command);
        let visible = Route::ALL.iter().filter(|r| h.visible() == Some(**r)).count();
        assert!(visible <= 1);
    }
    h.elapse();
    assert_eq!(h.router.phase().visible(), h.router.desired());
}

#[test]
fn lock_is_released_once_every_transition_settles() {
    let mut h = Harness::at("/");
    h.run(Command::TriggerClicked(Route::About));
    assert!(h.router.phase().is_animating());
    h.elapse();
    assert!(!h.router.phase().is_animating());
    h.run(Command::CloseRequested(CloseSource::Escape));
    assert!(h.router.phase().is_animating());
    h.elapse();
    assert!(!h.router.phase().is_animating());
}

// =============================================================
// Routes without a modal
// =============================================================

#[test]
fn page_without_modals_treats_every_route_as_unknown() {
    let mut h = Harness::with_modals("/about", []);
    assert!(h.load("").is_empty());
    assert_eq!(h.router.phase(), Phase::Closed);
    assert!(!h.scroll_locked);
    assert!(h.timers.is_empty());

    assert!(h.run(Command::PopState(Location::new("/mission", ""))).is_empty());
    assert!(h.run(Command::HashChange(Location::new("/", "#contact"))).is_empty());
    assert!(h.run(Command::TriggerClicked(Route::About)).is_empty());
    assert_eq!(h.router.phase(), Phase::Closed);
    assert_eq!(h.stack.len(), 1);
}

#[test]
fn missing_modal_closes_the_open_one() {
    let mut h = Harness::with_modals("/", [Route::About, Route::Mission]);
    h.run(Command::TriggerClicked(Route::About));
    h.elapse();

    h.edit_hash("#contact");
    h.elapse();
    assert_eq!(h.router.phase(), Phase::Closed);
    assert_eq!(h.router.desired(), None);
    assert!(!h.router.is_available(Route::Contact));
    assert!(h.router.is_available(Route::Mission));
}
