use landing::route::Route;

use super::*;

// =============================================================================
// key_action
// =============================================================================

#[test]
fn shortcuts_work_with_no_modal() {
    assert_eq!(key_action("2", false, false, Phase::Closed), Some(KeyAction::Shortcut(Shortcut::ActivateLink(1))));
    assert_eq!(key_action("h", false, false, Phase::Closed), Some(KeyAction::Shortcut(Shortcut::ScrollTop)));
}

#[test]
fn escape_with_no_modal_does_nothing() {
    assert_eq!(key_action("Escape", false, false, Phase::Closed), None);
}

#[test]
fn escape_closes_open_modal() {
    let phase = Phase::Open { route: Route::About };
    assert_eq!(key_action("Escape", false, false, phase), Some(KeyAction::CloseModal));
}

#[test]
fn escape_ignored_while_animating() {
    let opening = Phase::Opening { route: Route::About, seq: 1 };
    let closing = Phase::Closing { route: Route::About, seq: 2 };
    assert_eq!(key_action("Escape", false, false, opening), None);
    assert_eq!(key_action("Escape", false, false, closing), None);
}

#[test]
fn shortcuts_suppressed_while_modal_is_up() {
    let phase = Phase::Open { route: Route::Contact };
    assert_eq!(key_action("1", false, false, phase), None);
    assert_eq!(key_action("h", false, false, phase), None);
}

// =============================================================================
// fragment links
// =============================================================================

#[test]
fn fragment_links_to_page_sections_are_taken_over() {
    assert!(follow_fragment_link("#faq"));
    assert!(follow_fragment_link("#missing-section"));
}

#[test]
fn route_fragments_are_left_to_hashchange() {
    for route in Route::ALL {
        assert!(!follow_fragment_link(&format!("#{route}")));
    }
    assert!(!follow_fragment_link("https://example.com/#faq"));
    assert!(!follow_fragment_link("#"));
}

// =============================================================================
// housekeeping off the browser
// =============================================================================

#[test]
fn os_change_applies_when_nothing_stored() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(ThemeState::new(Theme::Dark));
    assert_eq!(os_scheme_changed(state, false), Some(Theme::Light));
    assert_eq!(state.get_untracked().theme, Theme::Light);
}

#[test]
fn going_offline_is_announced() {
    let owner = Owner::new();
    owner.set();
    let announcer = Announcer::new(1000);
    connection_changed(announcer, Connection::Offline);
    assert_eq!(announcer.message(), landing::connection::OFFLINE_ANNOUNCEMENT);
    connection_changed(announcer, Connection::Online);
    assert_eq!(announcer.message(), landing::connection::OFFLINE_ANNOUNCEMENT);
}

#[test]
fn install_resolves_home_route() {
    let owner = Owner::new();
    owner.set();
    let host = ModalHost::new(landing::timing::Timings::default(), Route::ALL);
    install(host, RwSignal::new(ThemeState::default()), Announcer::new(1000));
    assert_eq!(host.phase_untracked(), Phase::Closed);
}
