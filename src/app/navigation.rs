//! Navigation methods for the App.

use crate::domain::DrawerEvent;
use crate::haptics;
use crate::navigation::NAV_ITEMS;

use super::App;

impl App {
    /// Navigate to the section at `index` in the registry.
    ///
    /// Resets the content scroll and bottom-nav visibility, closes the
    /// drawer if it was open, and emits best-effort feedback. Out-of-range
    /// indices are ignored.
    pub fn navigate_to(&mut self, index: usize) {
        if index >= NAV_ITEMS.len() {
            return;
        }
        self.active_section = index;
        self.drawer_selection = index;
        self.scroll_y = 0;
        self.nav_visibility.reset();
        self.drawer = self.drawer.transition(DrawerEvent::Navigated);
        haptics::pulse();
        self.mark_dirty();
    }

    /// Navigate to the next section, wrapping at the end.
    pub fn next_section(&mut self) {
        self.navigate_to((self.active_section + 1) % NAV_ITEMS.len());
    }

    /// Navigate to the previous section, wrapping at the start.
    pub fn previous_section(&mut self) {
        let count = NAV_ITEMS.len();
        self.navigate_to((self.active_section + count - 1) % count);
    }

    /// Open the drawer via the hamburger trigger.
    pub fn open_drawer(&mut self) {
        self.drawer = self.drawer.transition(DrawerEvent::HamburgerPressed);
        if self.drawer.is_open() {
            self.drawer_selection = self.active_section;
        }
        self.mark_dirty();
    }

    /// Close the drawer from the backdrop or an explicit close action.
    pub fn close_drawer(&mut self, event: DrawerEvent) {
        self.drawer = self.drawer.transition(event);
        self.mark_dirty();
    }

    /// Move the drawer highlight up.
    pub fn drawer_select_previous(&mut self) {
        if self.drawer_selection > 0 {
            self.drawer_selection -= 1;
            self.mark_dirty();
        }
    }

    /// Move the drawer highlight down.
    pub fn drawer_select_next(&mut self) {
        if self.drawer_selection + 1 < NAV_ITEMS.len() {
            self.drawer_selection += 1;
            self.mark_dirty();
        }
    }

    /// Navigate to the highlighted drawer entry.
    pub fn activate_drawer_selection(&mut self) {
        self.navigate_to(self.drawer_selection);
    }

    /// Scroll the active content down by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        let new_offset = (self.scroll_y + lines).min(self.max_scroll);
        if new_offset != self.scroll_y {
            self.scroll_y = new_offset;
            self.after_scroll();
        }
    }

    /// Scroll the active content up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        let new_offset = self.scroll_y.saturating_sub(lines);
        if new_offset != self.scroll_y {
            self.scroll_y = new_offset;
            self.after_scroll();
        }
    }

    /// Feed the new offset into the bottom-nav auto-hide tracker.
    fn after_scroll(&mut self) {
        if self.viewport.is_compact_shell() {
            self.nav_visibility.on_scroll(self.scroll_y);
        }
        self.mark_dirty();
    }
}
