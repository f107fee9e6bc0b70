//! Page-level housekeeping: load state, connectivity, load timing.

use landing::connection::Connection;

/// Whether the document has already fired `load`.
pub fn is_loaded() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.ready_state() == "complete")
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Current `navigator.onLine` status.
pub fn connection() -> Connection {
    #[cfg(feature = "csr")]
    {
        web_sys::window().map_or(Connection::Online, |w| Connection::from_online(w.navigator().on_line()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Connection::Online
    }
}

/// `loadEventStart` and `loadEventEnd` of the navigation timing entry.
pub fn navigation_load_window() -> Option<(f64, f64)> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let performance = web_sys::window()?.performance()?;
        let entry = performance
            .get_entries_by_type("navigation")
            .get(0)
            .dyn_into::<web_sys::PerformanceNavigationTiming>()
            .ok()?;
        Some((entry.load_event_start(), entry.load_event_end()))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
