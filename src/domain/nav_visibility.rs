//! Bottom-navigation auto-hide tracking.
//!
//! This module provides [`NavVisibility`], the scroll-driven visibility
//! state for the mobile bottom navigation bar. The bar hides while the user
//! scrolls down through long content and reappears the moment they scroll
//! back up or return near the top.

use crate::ui::layout::breakpoints::NAV_HIDE_MIN_OFFSET;

/// Scroll-driven visibility state for the bottom navigation bar.
///
/// The hide decision uses the sign of the last scroll delta rather than the
/// absolute position, so oscillation around the minimum offset does not
/// flicker the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavVisibility {
    /// Scroll offset observed on the previous event
    pub last_scroll_y: usize,
    /// Whether the bar is currently shown
    pub visible: bool,
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl NavVisibility {
    /// Create a fresh tracker: at the top, bar visible.
    pub fn new() -> Self {
        Self {
            last_scroll_y: 0,
            visible: true,
        }
    }

    /// Feed a new scroll offset and update visibility.
    ///
    /// Hidden when scrolling down (`current > last`) past the minimum
    /// offset; visible on any upward scroll or while near the top.
    pub fn on_scroll(&mut self, current_scroll_y: usize) {
        if current_scroll_y > self.last_scroll_y && current_scroll_y > NAV_HIDE_MIN_OFFSET {
            self.visible = false;
        } else {
            self.visible = true;
        }
        self.last_scroll_y = current_scroll_y;
    }

    /// Check if the bar should be rendered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reset to the top-of-page state (e.g. after navigation).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
