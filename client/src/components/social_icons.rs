//! Row of social icons. They come first in the tab order.

use landing::links::social_tab_index;
use leptos::prelude::*;

use crate::config::SocialLink;

#[component]
pub fn SocialIcons(socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <nav class="social-icons" aria-label="Social links">
            {socials
                .into_iter()
                .enumerate()
                .map(|(position, social)| {
                    let external = !social.url.starts_with("mailto:");
                    view! {
                        <a
                            class="social-icon"
                            href=social.url
                            aria-label=social.label.clone()
                            title=social.label
                            tabindex=social_tab_index(position).to_string()
                            target=external.then_some("_blank")
                            rel=external.then_some("noopener noreferrer")
                        >
                            <span class=format!("icon icon--{}", social.icon) aria-hidden="true"></span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
