//! Light/dark toggle button.

use landing::theme::Theme;
use leptos::prelude::*;

use crate::state::theme::ThemeState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            class="theme-toggle"
            type="button"
            aria-label=move || theme.get().theme.toggle_label()
            title=move || theme.get().theme.toggle_label()
            on:click=move |_| {
                let next = crate::util::theme::toggle(theme.get_untracked().theme);
                theme.update(|t| t.theme = next);
            }
        >
            {move || match theme.get().theme {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
