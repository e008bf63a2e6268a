//! Slide-in drawer state machine.
//!
//! This module provides [`DrawerState`], the two-state machine behind the
//! mobile navigation drawer. Desktop uses a persistent sidebar and never
//! consults this state.

/// Drawer visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Events that drive the drawer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Hamburger trigger activated
    HamburgerPressed,
    /// Backdrop (area outside the drawer) activated while open
    BackdropPressed,
    /// Explicit close action
    ClosePressed,
    /// A navigation action completed successfully
    Navigated,
}

impl DrawerState {
    /// Apply an event and return the next state.
    ///
    /// From `Closed`, a hamburger press always opens. From `Open`, backdrop,
    /// close, and navigation always close; a second hamburger press closes
    /// as well (toggle). No event produces a third state.
    pub fn transition(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (DrawerState::Closed, DrawerEvent::HamburgerPressed) => DrawerState::Open,
            (DrawerState::Open, DrawerEvent::HamburgerPressed) => DrawerState::Closed,
            (DrawerState::Open, DrawerEvent::BackdropPressed) => DrawerState::Closed,
            (DrawerState::Open, DrawerEvent::ClosePressed) => DrawerState::Closed,
            (DrawerState::Open, DrawerEvent::Navigated) => DrawerState::Closed,
            (state, _) => state,
        }
    }

    /// Check if the drawer is open.
    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamburger_opens_from_closed() {
        let state = DrawerState::Closed.transition(DrawerEvent::HamburgerPressed);
        assert_eq!(state, DrawerState::Open);
    }

    #[test]
    fn test_hamburger_toggles_when_open() {
        let state = DrawerState::Open.transition(DrawerEvent::HamburgerPressed);
        assert_eq!(state, DrawerState::Closed);
    }

    #[test]
    fn test_all_close_events_close_from_open() {
        for event in [
            DrawerEvent::BackdropPressed,
            DrawerEvent::ClosePressed,
            DrawerEvent::Navigated,
        ] {
            assert_eq!(
                DrawerState::Open.transition(event),
                DrawerState::Closed,
                "{:?} should close the drawer",
                event
            );
        }
    }

    #[test]
    fn test_close_events_are_noops_when_closed() {
        for event in [
            DrawerEvent::BackdropPressed,
            DrawerEvent::ClosePressed,
            DrawerEvent::Navigated,
        ] {
            assert_eq!(DrawerState::Closed.transition(event), DrawerState::Closed);
        }
    }

    #[test]
    fn test_no_third_state_reachable() {
        // Every (state, event) pair lands in Open or Closed
        let states = [DrawerState::Closed, DrawerState::Open];
        let events = [
            DrawerEvent::HamburgerPressed,
            DrawerEvent::BackdropPressed,
            DrawerEvent::ClosePressed,
            DrawerEvent::Navigated,
        ];
        for state in states {
            for event in events {
                let next = state.transition(event);
                assert!(matches!(next, DrawerState::Closed | DrawerState::Open));
            }
        }
    }

    #[test]
    fn test_default_is_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
        assert!(!DrawerState::default().is_open());
    }
}
