//! Visually hidden `aria-live` region fed by the `Announcer`.

use leptos::prelude::*;

use crate::state::announcer::Announcer;

#[component]
pub fn LiveRegion() -> impl IntoView {
    let announcer = expect_context::<Announcer>();

    view! {
        <div class="sr-only" aria-live="polite" aria-atomic="true">
            {move || announcer.message()}
        </div>
    }
}
