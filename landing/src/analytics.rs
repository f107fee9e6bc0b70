//! Analytics event payloads.
//!
//! The page reports to whichever of `gtag` and `analytics.track` happen to be
//! loaded. This module only shapes the payloads; delivery is best-effort and
//! lives in the client.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde_json::{Value, json};

use crate::links::LinkKind;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    LinkClick { label: String, url: String, kind: LinkKind },
    ModalOpen { modal_id: String },
    ModalClose { modal_id: String },
    PageLoadTime { ms: u64 },
}

impl AnalyticsEvent {
    /// The `gtag('event', <name>, ...)` event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LinkClick { .. } => "link_click",
            Self::ModalOpen { .. } => "modal_open",
            Self::ModalClose { .. } => "modal_close",
            Self::PageLoadTime { .. } => "page_load_time",
        }
    }

    /// Parameters object passed as the third `gtag` argument.
    #[must_use]
    pub fn gtag_params(&self) -> Value {
        match self {
            Self::LinkClick { label, url, kind } => json!({
                "event_category": "engagement",
                "event_label": label,
                "custom_parameters": {
                    "link_type": kind.as_str(),
                    "link_url": url,
                },
                "value": 1,
            }),
            Self::ModalOpen { modal_id } | Self::ModalClose { modal_id } => json!({
                "event_category": "engagement",
                "event_label": modal_id,
                "value": 1,
            }),
            Self::PageLoadTime { ms } => json!({
                "event_category": "performance",
                "value": ms,
            }),
        }
    }

    /// Event name and properties for `analytics.track`, for events that
    /// custom analytics cares about.
    #[must_use]
    pub fn track_call(&self) -> Option<(&'static str, Value)> {
        match self {
            Self::LinkClick { label, url, kind } => Some((
                "Link Clicked",
                json!({
                    "link": label,
                    "url": url,
                    "type": kind.as_str(),
                }),
            )),
            _ => None,
        }
    }
}

/// Round a navigation timing delta to whole milliseconds.
///
/// Returns `None` for non-positive or non-finite deltas, which means the load
/// event has not finished or the timing entry is unusable.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn page_load_ms(load_event_start: f64, load_event_end: f64) -> Option<u64> {
    let delta = load_event_end - load_event_start;
    (delta.is_finite() && delta > 0.0).then(|| delta.round() as u64)
}
