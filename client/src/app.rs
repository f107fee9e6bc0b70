//! Root component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::landing::LandingPage;
use crate::state::announcer::Announcer;
use crate::state::modal::ModalHost;
use crate::state::theme::ThemeState;
use crate::util::theme;

/// Root application component.
///
/// Resolves the starting theme before the first render so the page never
/// flashes the wrong palette, then provides the shared state contexts.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let initial = theme::initial();
    theme::apply(initial);

    provide_context(RwSignal::new(ThemeState::new(initial)));
    provide_context(ModalHost::new(config.timings, config.modals.iter().map(|modal| modal.route)));
    provide_context(Announcer::new(config.timings.announce_clear_ms));

    let title = config.profile.name.clone();
    let description = config.profile.tagline.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <LandingPage config/>
    }
}
