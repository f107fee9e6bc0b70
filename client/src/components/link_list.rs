//! Main list of link items.
//!
//! Each item reports its clicks, prefetches its target on first hover, and
//! labels itself for screen readers. Items with an image render as cards
//! whose picture loads lazily and fades in.

use landing::analytics::AnalyticsEvent;
use landing::links::{aria_label, link_tab_index, should_prefetch, tracking_label};
use leptos::prelude::*;

use crate::config::LinkItem;
use crate::util::{analytics, dom};

#[component]
pub fn LinkList(links: Vec<LinkItem>, social_count: usize) -> impl IntoView {
    view! {
        <ul class="links">
            {links
                .into_iter()
                .enumerate()
                .map(|(position, link)| {
                    view! {
                        <li>
                            <LinkEntry link tab_index=link_tab_index(social_count, position)/>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn LinkEntry(link: LinkItem, tab_index: usize) -> impl IntoView {
    let kind = link.kind();
    let label = aria_label(&link.title, &link.description, link.external, kind);
    let prefetched = StoredValue::new(false);

    let click_label = tracking_label(&link.title).to_owned();
    let click_url = link.url.clone();
    let on_click = move |_| {
        leptos::logging::log!("link clicked: {click_label} ({click_url})");
        analytics::report(&AnalyticsEvent::LinkClick {
            label: click_label.clone(),
            url: click_url.clone(),
            kind,
        });
    };

    let hover_url = link.url.clone();
    let on_mouseenter = move |_| {
        if prefetched.get_value() || !should_prefetch(&hover_url) {
            return;
        }
        prefetched.set_value(true);
        dom::prefetch(&hover_url);
    };

    let card = link.image.clone().map(|src| view! { <CardImage src alt=link.title.clone()/> });
    let is_card = card.is_some();
    let description = (!link.description.is_empty()).then(|| {
        let description = link.description.clone();
        view! { <span class="link-item__description">{description}</span> }
    });

    view! {
        <a
            class=if is_card { "link-item link-item--card" } else { "link-item" }
            data-link-type=kind.as_str()
            href=link.url.clone()
            aria-label=label
            tabindex=tab_index.to_string()
            target=link.external.then_some("_blank")
            rel=link.external.then_some("noopener noreferrer")
            on:click=on_click
            on:mouseenter=on_mouseenter
        >
            {card}
            <span class="link-item__title">{link.title.clone()}</span>
            {description}
        </a>
    }
}

/// Picture of an image card. `src` stays in `data-src` until the lazy
/// image observer sees it.
#[component]
fn CardImage(src: String, alt: String) -> impl IntoView {
    let loaded = RwSignal::new(false);
    let failed = RwSignal::new(false);

    view! {
        <div class="card-image" style:display=move || if failed.get() { "none" } else { "" }>
            <img
                class="lazy"
                class:loaded=move || loaded.get()
                data-src=src
                alt=alt
                on:load=move |_| loaded.set(true)
                on:error=move |_| failed.set(true)
            />
        </div>
    }
}
