//! Side effects the engine asks the browser host to perform.

use crate::analytics::AnalyticsEvent;
use crate::route::{HistoryEntry, Route};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Stop the page behind the modal from scrolling.
    LockScroll,
    /// Restore background scrolling.
    UnlockScroll,
    /// Move focus to the close control of this modal.
    FocusClose(Route),
    /// Arm the fallback timer for transition `seq`. When it fires the host
    /// dispatches `Command::SettleTimeout(seq)`.
    ScheduleSettle { seq: u64, after_ms: u32 },
    /// Report an analytics event, if a reporter is present.
    Track(AnalyticsEvent),
    /// `history.pushState`.
    PushHistory(HistoryEntry),
    /// `history.replaceState`.
    ReplaceHistory(HistoryEntry),
}
