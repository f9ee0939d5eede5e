//! Platform window-chrome handling for Bloom
//!
//! The navigation layer decides per route whether the status bar should
//! be hidden; this crate tracks and applies that decision to the window.
//! The shell runs edge-to-edge: the navigation bar stays hidden on every
//! screen, and the last directive is re-applied whenever the window
//! regains focus.

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};
use tracing::debug;

/// System-bar visibility state for the application window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowChrome {
    /// Whether the status bar is hidden
    status_bar_hidden: bool,
    /// Whether the navigation bar is hidden
    navigation_bar_hidden: bool,
    /// Whether window content extends under the system bars
    decor_fits_system_windows: bool,
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowChrome {
    /// Create chrome state with all system bars visible
    pub fn new() -> Self {
        Self {
            status_bar_hidden: false,
            navigation_bar_hidden: false,
            decor_fits_system_windows: true,
        }
    }

    /// Apply a status-bar visibility directive
    ///
    /// Hiding the status bar hides every system bar; showing it keeps the
    /// navigation bar hidden so content stays edge-to-edge.
    pub fn apply(&mut self, hide_status_bar: bool) {
        self.decor_fits_system_windows = false;
        self.status_bar_hidden = hide_status_bar;
        self.navigation_bar_hidden = true;
        debug!(hide_status_bar, "window chrome applied");
    }

    /// Re-apply the current state when the window regains focus
    ///
    /// The system restores its bars while the window is unfocused; the
    /// stored directive must win again on focus. Returns the visibility
    /// to enforce.
    pub fn on_focus_changed(&self, has_focus: bool) -> Option<bool> {
        if has_focus {
            Some(self.status_bar_hidden)
        } else {
            None
        }
    }

    /// Whether the status bar is currently hidden
    pub fn status_bar_hidden(&self) -> bool {
        self.status_bar_hidden
    }

    /// Whether the navigation bar is currently hidden
    pub fn navigation_bar_hidden(&self) -> bool {
        self.navigation_bar_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_shows_bars() {
        let chrome = WindowChrome::new();
        assert!(!chrome.status_bar_hidden());
        assert!(!chrome.navigation_bar_hidden());
    }

    #[test]
    fn test_apply_hide() {
        let mut chrome = WindowChrome::new();
        chrome.apply(true);
        assert!(chrome.status_bar_hidden());
        assert!(chrome.navigation_bar_hidden());
    }

    #[test]
    fn test_apply_show_keeps_edge_to_edge() {
        let mut chrome = WindowChrome::new();
        chrome.apply(true);
        chrome.apply(false);
        assert!(!chrome.status_bar_hidden());
        // Navigation bar stays hidden either way.
        assert!(chrome.navigation_bar_hidden());
    }

    #[test]
    fn test_focus_reapplies_last_directive() {
        let mut chrome = WindowChrome::new();
        chrome.apply(true);
        assert_eq!(chrome.on_focus_changed(true), Some(true));
        assert_eq!(chrome.on_focus_changed(false), None);

        chrome.apply(false);
        assert_eq!(chrome.on_focus_changed(true), Some(false));
    }

    #[test]
    fn test_chrome_serialization() {
        let mut chrome = WindowChrome::new();
        chrome.apply(true);
        let json = serde_json::to_string(&chrome).unwrap();
        let parsed: WindowChrome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, chrome);
    }
}
