//! `window.location` and `window.history` access.

use landing::route::{HistoryEntry, Location};

/// Snapshot the current pathname and hash.
pub fn current_location() -> Location {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Location::default();
        };
        let location = window.location();
        Location::new(location.pathname().unwrap_or_default(), location.hash().unwrap_or_default())
    }
    #[cfg(not(feature = "csr"))]
    {
        Location::new(landing::route::ROOT_PATH, "")
    }
}

/// `history.pushState(entry.state, "", entry.path)`.
pub fn push(entry: &HistoryEntry) {
    write(entry, false);
}

/// `history.replaceState(entry.state, "", entry.path)`.
pub fn replace(entry: &HistoryEntry) {
    write(entry, true);
}

/// Stop the browser from restoring the scroll position on navigation.
pub fn disable_scroll_restoration() {
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
            let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
        }
    }
}

#[cfg(feature = "csr")]
fn write(entry: &HistoryEntry, replace: bool) {
    let Some(Ok(history)) = web_sys::window().map(|w| w.history()) else {
        return;
    };
    let state = match entry.state.to_json() {
        Ok(raw) => js_sys::JSON::parse(&raw).unwrap_or(wasm_bindgen::JsValue::NULL),
        Err(e) => {
            leptos::logging::warn!("history state not encoded: {e}");
            wasm_bindgen::JsValue::NULL
        }
    };
    let result = if replace {
        history.replace_state_with_url(&state, "", Some(&entry.path))
    } else {
        history.push_state_with_url(&state, "", Some(&entry.path))
    };
    if let Err(err) = result {
        leptos::logging::warn!("history write to {} failed: {err:?}", entry.path);
    }
}

#[cfg(not(feature = "csr"))]
fn write(entry: &HistoryEntry, replace: bool) {
    let _ = (entry, replace);
}
