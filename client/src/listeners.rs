//! Window-level event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs once, after the landing page has mounted: history
//! and hash navigation feed the modal router, global keys close modals or
//! trigger shortcuts, in-page fragment links scroll smoothly, and page
//! lifecycle events keep scroll position, connectivity, and load timing in
//! order.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use landing::analytics::{AnalyticsEvent, page_load_ms};
use landing::connection::Connection;
use landing::controller::Phase;
use landing::keyboard::{Shortcut, shortcut_for_key};
use landing::links::anchor_target;
use landing::theme::Theme;
use leptos::prelude::*;

use crate::state::announcer::Announcer;
use crate::state::modal::ModalHost;
use crate::state::theme::ThemeState;
use crate::util::{analytics, dom, page, theme};

/// What a window `keydown` should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseModal,
    Shortcut(Shortcut),
}

/// Map a global key press to an action given the modal phase.
///
/// While the modal system is up only Escape does anything, and only once
/// the modal has finished opening.
pub fn key_action(key: &str, ctrl: bool, meta: bool, phase: Phase) -> Option<KeyAction> {
    if phase.system_active() {
        return (key == "Escape" && !phase.is_animating()).then_some(KeyAction::CloseModal);
    }
    shortcut_for_key(key, ctrl, meta).map(KeyAction::Shortcut)
}

/// Reflect a connectivity change on `<body>` and announce going offline.
pub fn connection_changed(announcer: Announcer, connection: Connection) {
    dom::set_body_attribute("data-connection", connection.as_str());
    if let Some(message) = connection.announcement() {
        announcer.announce(message);
    }
}

/// Follow OS colour-scheme changes unless the visitor picked a theme.
pub fn os_scheme_changed(state: RwSignal<ThemeState>, prefers_dark: bool) -> Option<Theme> {
    let next = Theme::on_os_change(theme::stored().as_deref(), prefers_dark)?;
    theme::apply(next);
    state.update(|s| s.theme = next);
    Some(next)
}

/// Handle a click on an in-page `#fragment` link. Returns whether the
/// browser's own jump should be suppressed; route fragments are left alone
/// so they reach `hashchange`.
pub fn follow_fragment_link(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    if !dom::scroll_to_anchor(id) {
        leptos::logging::log!("no element for fragment link {href}");
    }
    true
}

/// Log and report how long the `load` event took.
pub fn report_page_load() {
    let Some((start, end)) = page::navigation_load_window() else {
        return;
    };
    if let Some(ms) = page_load_ms(start, end) {
        leptos::logging::log!("page load time: {ms}ms");
        analytics::report(&AnalyticsEvent::PageLoadTime { ms });
    }
}

fn on_load() {
    dom::scroll_to_top(false);
    #[cfg(feature = "csr")]
    {
        // loadEventEnd is only filled in once the load handlers have returned.
        gloo_timers::callback::Timeout::new(0, report_page_load).forget();
    }
}

/// Attach every window listener and run the start-up housekeeping.
pub fn install(host: ModalHost, theme_state: RwSignal<ThemeState>, announcer: Announcer) {
    crate::util::history::disable_scroll_restoration();
    dom::scroll_to_top(false);
    dom::set_body_attribute("data-connection", page::connection().as_str());
    theme::watch_os(move |prefers_dark| {
        if let Some(next) = os_scheme_changed(theme_state, prefers_dark) {
            leptos::logging::log!("theme follows OS: {next}");
        }
    });

    #[cfg(feature = "csr")]
    {
        use landing::router::{CloseSource, Command};
        use leptos::ev;

        use crate::util::history::current_location;

        let _ = window_event_listener(ev::popstate, move |_| {
            host.dispatch(Command::PopState(current_location()));
        });
        let _ = window_event_listener(ev::hashchange, move |_| {
            host.dispatch(Command::HashChange(current_location()));
        });
        let _ = window_event_listener(ev::keydown, move |ev| {
            match key_action(&ev.key(), ev.ctrl_key(), ev.meta_key(), host.phase_untracked()) {
                Some(KeyAction::CloseModal) => host.dispatch(Command::CloseRequested(CloseSource::Escape)),
                Some(KeyAction::Shortcut(Shortcut::ActivateLink(index))) => {
                    if dom::click_link(index) {
                        ev.prevent_default();
                    }
                }
                Some(KeyAction::Shortcut(Shortcut::ScrollTop)) => {
                    ev.prevent_default();
                    dom::scroll_to_top(true);
                }
                None => {}
            }
        });
        let _ = window_event_listener(ev::click, |ev| {
            if dom::fragment_link_href(&ev).is_some_and(|href| follow_fragment_link(&href)) {
                ev.prevent_default();
            }
        });
        let _ = window_event_listener(ev::pageshow, |_| dom::scroll_to_top(false));
        let _ = window_event_listener(ev::online, move |_| connection_changed(announcer, Connection::Online));
        let _ = window_event_listener(ev::offline, move |_| connection_changed(announcer, Connection::Offline));

        if page::is_loaded() {
            on_load();
        } else {
            let _ = window_event_listener(ev::load, |_| on_load());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = announcer;
        if page::is_loaded() {
            on_load();
        }
    }

    host.resolve_initial_route();
    dom::add_body_class("js-loaded");
}
