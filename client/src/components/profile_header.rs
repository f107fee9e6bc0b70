//! Avatar, name, and tagline at the top of the page.

use leptos::prelude::*;

use crate::config::Profile;
use crate::state::theme::ThemeState;

/// Page header. The avatar swaps with the theme.
#[component]
pub fn ProfileHeader(profile: Profile) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let alt = if profile.avatar_alt.is_empty() { profile.name.clone() } else { profile.avatar_alt.clone() };
    let tagline = (!profile.tagline.is_empty()).then(|| {
        let tagline = profile.tagline.clone();
        view! { <p class="profile__tagline">{tagline}</p> }
    });
    let name = profile.name.clone();

    view! {
        <header class="profile">
            <img
                class="avatar"
                src=move || theme.get().avatar(&profile).to_owned()
                alt=alt
                width="96"
                height="96"
            />
            <h1 class="profile__name">{name}</h1>
            {tagline}
        </header>
    }
}
