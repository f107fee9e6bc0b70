//! Menu of modal triggers.

use landing::route::Route;
use landing::router::Command;
use leptos::prelude::*;

use crate::config::ModalContent;
use crate::state::modal::ModalHost;

/// One `.menu-item` per modal. Each is a real link to the modal's path so it
/// still works without the client.
#[component]
pub fn ModalMenu(modals: Vec<ModalContent>) -> impl IntoView {
    let host = expect_context::<ModalHost>();

    view! {
        <nav class="modal-menu" aria-label="More">
            {modals
                .into_iter()
                .map(|modal| {
                    let route: Route = modal.route;
                    view! {
                        <a
                            class="menu-item"
                            class:modal-opening=move || host.phase().opening() == Some(route)
                            href=route.path()
                            data-modal=route.as_str()
                            aria-haspopup="dialog"
                            aria-controls=route.modal_id()
                            on:click=move |ev| {
                                ev.prevent_default();
                                host.dispatch(Command::TriggerClicked(route));
                            }
                        >
                            {modal.label().to_owned()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
