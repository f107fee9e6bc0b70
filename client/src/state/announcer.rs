//! Screen-reader live region.

#[cfg(test)]
#[path = "announcer_test.rs"]
mod announcer_test;

use leptos::prelude::*;

/// Message text for the page's `aria-live` region. Each announcement clears
/// itself after a delay unless a newer one has replaced it.
#[derive(Clone, Copy)]
pub struct Announcer {
    message: RwSignal<String>,
    generation: StoredValue<u64>,
    clear_after_ms: u32,
}

impl Announcer {
    pub fn new(clear_after_ms: u32) -> Self {
        Self { message: RwSignal::new(String::new()), generation: StoredValue::new(0), clear_after_ms }
    }

    pub fn message(&self) -> String {
        self.message.get()
    }

    pub fn announce(&self, text: &str) {
        self.message.set(text.to_owned());
        let generation = self
            .generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default();

        #[cfg(feature = "csr")]
        {
            let announcer = *self;
            gloo_timers::callback::Timeout::new(self.clear_after_ms, move || announcer.expire(generation)).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (generation, self.clear_after_ms);
        }
    }

    /// Clear the region if announcement `generation` is still showing.
    pub fn expire(&self, generation: u64) {
        if self.generation.try_get_value() == Some(generation) {
            self.message.set(String::new());
        }
    }
}
