//! Full-screen overlay holding the three content modals.
//!
//! ARCHITECTURE
//! ============
//! Visibility comes from `ModalHost::phase`. `.modal-system` stays active
//! until a close transition has finished, while each modal's `active` class
//! drops as soon as it starts closing so the CSS transition can run. The
//! modal's own opacity `transitionend` reports the transition finished,
//! along with whether the modal ended up visible; transitions bubbling up
//! from its children are ignored.

use landing::route::Route;
use landing::router::{CloseSource, Command};
use leptos::prelude::*;

use crate::config::ModalContent;
use crate::state::modal::ModalHost;
use crate::util::{dom, markdown};

/// The one transitioned property whose `transitionend` settles a modal.
/// Transform ends at the same moment and is ignored.
const SETTLE_PROPERTY: &str = "opacity";

#[component]
pub fn ModalSystem(modals: Vec<ModalContent>) -> impl IntoView {
    let host = expect_context::<ModalHost>();

    let on_overlay_click = move |ev: leptos::ev::MouseEvent| {
        if ev.target() == ev.current_target() {
            host.dispatch(Command::CloseRequested(CloseSource::Overlay));
        }
    };

    view! {
        <div
            class="modal-system"
            class:active=move || host.phase().system_active()
            aria-hidden=move || (!host.phase().system_active()).to_string()
        >
            <div id="modal-overlay" class="modal-overlay" on:click=on_overlay_click>
                {modals.into_iter().map(|content| view! { <ModalPanel content/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ModalPanel(content: ModalContent) -> impl IntoView {
    let host = expect_context::<ModalHost>();
    let route: Route = content.route;
    let title_id = format!("{}-title", route.modal_id());
    let labelled_by = title_id.clone();
    let body = markdown::render(&content.body);

    view! {
        <div
            id=route.modal_id()
            class="modal"
            class:active=move || host.phase().visible() == Some(route)
            role="dialog"
            aria-modal="true"
            aria-labelledby=labelled_by
            on:transitionend=move |ev: leptos::ev::TransitionEvent| {
                if ev.target() == ev.current_target() && ev.property_name() == SETTLE_PROPERTY {
                    let shown = dom::settled_opacity(&ev)
                        .map_or(host.phase_untracked().visible() == Some(route), |opacity| opacity > 0.5);
                    host.dispatch(Command::TransitionEnd { route, shown });
                }
            }
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Tab" {
                    dom::trap_focus(&ev);
                }
            }
        >
            <div class="modal__header">
                <h2 id=title_id class="modal__title">{content.title}</h2>
                <button
                    class="modal-close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| host.dispatch(Command::CloseRequested(CloseSource::Button))
                >
                    "✕"
                </button>
            </div>
            <div class="modal__body" inner_html=body></div>
        </div>
    }
}
