//! Global keyboard shortcuts and the modal focus trap.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Selector for the elements a modal's focus trap cycles through.
pub const FOCUSABLE_SELECTOR: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Number of links reachable through the digit shortcuts.
pub const SHORTCUT_LINK_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Click the link at this zero-based index.
    ActivateLink(usize),
    /// Smooth-scroll back to the top of the page.
    ScrollTop,
}

/// Map a `keydown` to a page shortcut.
///
/// `1`..`3` activate the first three links. `h` scrolls home unless Ctrl or
/// Meta is held, so browser shortcuts keep working.
#[must_use]
pub fn shortcut_for_key(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "h" | "H" if !ctrl && !meta => Some(Shortcut::ScrollTop),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            let digit = c.to_digit(10)? as usize;
            (1..=SHORTCUT_LINK_COUNT)
                .contains(&digit)
                .then(|| Shortcut::ActivateLink(digit - 1))
        }
    }
}

/// Decide where Tab should land inside a modal.
///
/// `count` is the number of focusable descendants and `current` the index of
/// the focused one, if focus is inside the modal. Returns the index to focus
/// when the browser's default would leave the modal, or `None` to let the
/// default happen.
#[must_use]
pub fn trap_tab(count: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (current, shift) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        _ => None,
    }
}
