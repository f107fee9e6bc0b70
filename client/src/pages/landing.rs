//! The single landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the profile, social icons, links, modal menu, and modal system
//! from `SiteConfig`, then attaches window listeners and observers once the
//! DOM exists.

use leptos::prelude::*;

use crate::components::link_list::LinkList;
use crate::components::live_region::LiveRegion;
use crate::components::modal_menu::ModalMenu;
use crate::components::modal_system::ModalSystem;
use crate::components::profile_header::ProfileHeader;
use crate::components::social_icons::SocialIcons;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::listeners;
use crate::state::announcer::Announcer;
use crate::state::modal::ModalHost;
use crate::state::theme::ThemeState;
use crate::util::observers;

#[component]
pub fn LandingPage(config: SiteConfig) -> impl IntoView {
    let host = expect_context::<ModalHost>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let announcer = expect_context::<Announcer>();

    // Runs once after mount; nothing in here is tracked.
    Effect::new(move || {
        listeners::install(host, theme, announcer);
        observers::observe_lazy_images();
        observers::observe_entrance_animations();
    });

    let SiteConfig { profile, socials, links, modals, .. } = config;
    let social_count = socials.len();

    view! {
        <ThemeToggle/>
        <main class="container">
            <ProfileHeader profile/>
            <SocialIcons socials/>
            <LinkList links social_count/>
            <ModalMenu modals=modals.clone()/>
        </main>
        <ModalSystem modals/>
        <LiveRegion/>
    }
}
