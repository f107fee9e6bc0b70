//! Best-effort delivery of analytics events.
//!
//! Looks up `window.gtag` and `window.analytics.track` at call time. Either
//! may be missing (blocked, not configured, not loaded yet); that is never an
//! error and never changes what the page does.

use landing::analytics::AnalyticsEvent;

pub fn report(event: &AnalyticsEvent) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return;
        };
        let global: &JsValue = window.as_ref();

        if let Some(gtag) = function(global, "gtag") {
            let params = to_js(&event.gtag_params());
            let _ = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(event.name()), &params);
        }

        if let Some((name, props)) = event.track_call() {
            let analytics = js_sys::Reflect::get(global, &JsValue::from_str("analytics")).unwrap_or(JsValue::UNDEFINED);
            if analytics.is_object() {
                if let Some(track) = function(&analytics, "track") {
                    let _ = track.call2(&analytics, &JsValue::from_str(name), &to_js(&props));
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = event;
    }
}

#[cfg(feature = "csr")]
fn function(target: &wasm_bindgen::JsValue, name: &str) -> Option<js_sys::Function> {
    use wasm_bindgen::JsCast;

    js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

#[cfg(feature = "csr")]
fn to_js(value: &serde_json::Value) -> wasm_bindgen::JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(wasm_bindgen::JsValue::NULL)
}
