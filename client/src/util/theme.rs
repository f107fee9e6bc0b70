//! Theme persistence and OS colour-scheme tracking.
//!
//! Reads the stored preference from `localStorage`, applies the theme as a
//! `data-theme` attribute on `<html>`, and writes back on toggle. Requires a
//! browser; native builds see "nothing stored, no OS signal".

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use landing::theme::Theme;
#[cfg(feature = "csr")]
use landing::theme::{DARK_SCHEME_QUERY, STORAGE_KEY};

/// The raw stored preference, if any.
pub fn stored() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether the OS asks for a dark colour scheme, when it says anything.
pub fn os_prefers_dark() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
        Some(query.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// The theme to start with.
pub fn initial() -> Theme {
    Theme::resolve(stored().as_deref(), os_prefers_dark())
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and remember the choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, next.as_str()) {
                leptos::logging::warn!("theme not persisted: {err:?}");
            }
        }
    }
    next
}

/// Call `on_change` with the new OS preference whenever it flips.
pub fn watch_os(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
            return;
        };
        let watched = query.clone();
        let listener = Closure::<dyn FnMut()>::new(move || on_change(watched.matches()));
        if query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            listener.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
