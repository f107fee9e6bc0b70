//! `IntersectionObserver` hooks: lazy images and entrance animations.
//!
//! Both observers are created once after the page has mounted. Browsers
//! without `IntersectionObserver` simply keep the `data-src` images unloaded
//! and the animations paused, matching the stylesheet's defaults.

/// Animations start once this share of the element is visible.
pub const ANIMATION_THRESHOLD: f64 = 0.1;

/// Selector for elements whose entrance animation waits for visibility.
pub const ANIMATED_SELECTOR: &str = ".link-item, .social-icon";

/// Selector for images that load on first intersection.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Swap `data-src` into `src` the first time each lazy image scrolls into
/// view.
pub fn observe_lazy_images() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let img = entry.target();
                    if let Some(src) = img.get_attribute("data-src").filter(|src| !src.is_empty()) {
                        let _ = img.set_attribute("src", &src);
                        let _ = img.class_list().remove_1("lazy");
                        observer.unobserve(&img);
                    }
                }
            },
        );
        let Ok(observer) = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
            return;
        };
        callback.forget();
        observe_all(&observer, LAZY_IMAGE_SELECTOR);
    }
}

/// Set `animation-play-state: running` on animated elements as they appear.
pub fn observe_entrance_animations() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<web_sys::HtmlElement>() {
                    let _ = el.style().set_property("animation-play-state", "running");
                }
            }
        });
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(ANIMATION_THRESHOLD));
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        callback.forget();
        observe_all(&observer, ANIMATED_SELECTOR);
    }
}

#[cfg(feature = "csr")]
fn observe_all(observer: &web_sys::IntersectionObserver, selector: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for el in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
    {
        observer.observe(&el);
    }
}
