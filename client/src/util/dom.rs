//! Small DOM operations used by the modal host and page listeners.
//!
//! Every lookup degrades to a no-op: a missing element, body, or head is
//! simply skipped.

use landing::route::Route;

/// Hide overflow on `<body>` while a modal is up.
pub fn lock_scroll() {
    set_body_overflow(Some("hidden"));
}

/// Restore the stylesheet's overflow on `<body>`.
pub fn unlock_scroll() {
    set_body_overflow(None);
}

fn set_body_overflow(value: Option<&str>) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

/// Focus the `.modal-close` control inside `#modal-{route}`.
pub fn focus_close_control(route: Route) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let selector = format!("#{} .modal-close", route.modal_id());
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(Some(el)) = document.query_selector(&selector) {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}

/// Keep Tab inside the modal the keydown came from.
///
/// Call from the modal container's `keydown` handler for the Tab key.
pub fn trap_focus(ev: &leptos::ev::KeyboardEvent) {
    #[cfg(feature = "csr")]
    {
        use landing::keyboard::{FOCUSABLE_SELECTOR, trap_tab};
        use wasm_bindgen::JsCast;

        let Some(modal) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(nodes) = modal.query_selector_all(FOCUSABLE_SELECTOR) else {
            return;
        };
        let focusables: Vec<web_sys::HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .collect();

        let active = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element());
        let current = active.and_then(|active| {
            focusables
                .iter()
                .position(|el| AsRef::<web_sys::Element>::as_ref(el) == &active)
        });

        if let Some(target) = trap_tab(focusables.len(), current, ev.shift_key()) {
            ev.prevent_default();
            if let Some(el) = focusables.get(target) {
                let _ = el.focus();
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
    }
}

/// Scroll the page to the top, instantly or smoothly.
pub fn scroll_to_top(smooth: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if smooth {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            return;
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                root.set_scroll_top(0);
            }
            if let Some(body) = document.body() {
                body.set_scroll_top(0);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = smooth;
    }
}

/// Click the `.link-item` at `index`, if there is one.
pub fn click_link(index: usize) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Ok(links) = document.query_selector_all(".link-item") else {
            return false;
        };
        let Ok(index) = u32::try_from(index) else {
            return false;
        };
        match links.item(index).and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok()) {
            Some(link) => {
                link.click();
                true
            }
            None => false,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = index;
        false
    }
}

/// Append `<link rel="prefetch" href=url>` to `<head>`.
pub fn prefetch(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let (Some(head), Ok(hint)) = (document.head(), document.create_element("link")) else {
            return;
        };
        let _ = hint.set_attribute("rel", "prefetch");
        let _ = hint.set_attribute("href", url);
        let _ = head.append_child(&hint);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Set an attribute on `<body>`.
pub fn set_body_attribute(name: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute(name, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, value);
    }
}

/// Add a class to `<body>`.
pub fn add_body_class(class: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1(class);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = class;
    }
}

/// Computed opacity of the element a `transitionend` fired on.
pub fn settled_opacity(ev: &leptos::ev::TransitionEvent) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
        let style = web_sys::window()?.get_computed_style(&el).ok().flatten()?;
        style.get_property_value("opacity").ok()?.trim().parse().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

/// Smooth-scroll the element with `id` to the top of its scroll container.
/// Returns whether such an element exists.
pub fn scroll_to_anchor(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(target) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// `href` of the `a[href^="#"]` a click landed in, if any.
pub fn fragment_link_href(ev: &leptos::ev::MouseEvent) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let el = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
        let anchor = el.closest("a[href^=\"#\"]").ok().flatten()?;
        anchor.get_attribute("href")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}
