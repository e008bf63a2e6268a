//! Viewport state tracking.
//!
//! This module provides [`ViewportState`], the domain object owned by the
//! shell that caches the current terminal dimensions together with their
//! classification. It is recomputed on every resize event; rapid resize
//! bursts are last-write-wins.

use crate::ui::layout::{DeviceClass, LayoutContext, Orientation};

/// Current viewport dimensions and their classification.
///
/// The classification fields are always derived from `width`/`height`
/// through the breakpoint policy; they are stored rather than recomputed
/// per read so a render pass sees one consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    /// Viewport width in columns
    pub width: u16,
    /// Viewport height in rows
    pub height: u16,
    /// Device class derived from width
    pub device_class: DeviceClass,
    /// Orientation derived from width/height
    pub orientation: Orientation,
}

impl ViewportState {
    /// Build a viewport state from raw terminal dimensions.
    pub fn from_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            device_class: DeviceClass::classify(width),
            orientation: Orientation::classify(width, height),
        }
    }

    /// Replace the dimensions and re-derive the classification.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::from_size(width, height);
    }

    /// Layout context for render functions.
    pub fn layout(&self) -> LayoutContext {
        LayoutContext::new(self.width, self.height)
    }

    /// Whether the compact (hamburger + bottom nav) shell variant applies.
    pub fn is_compact_shell(&self) -> bool {
        self.device_class.is_compact_shell()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::from_size(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_size_derives_classification() {
        let vp = ViewportState::from_size(60, 80);
        assert_eq!(vp.device_class, DeviceClass::Mobile);
        assert_eq!(vp.orientation, Orientation::Portrait);

        let vp = ViewportState::from_size(140, 40);
        assert_eq!(vp.device_class, DeviceClass::Desktop);
        assert_eq!(vp.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_resize_rederives() {
        let mut vp = ViewportState::from_size(140, 40);
        assert!(!vp.is_compact_shell());

        vp.resize(70, 20);
        assert_eq!(vp.width, 70);
        assert_eq!(vp.height, 20);
        assert_eq!(vp.device_class, DeviceClass::Mobile);
        assert!(vp.is_compact_shell());
    }

    #[test]
    fn test_classification_consistent_after_resize_burst() {
        // Last write wins: only the final dimensions matter
        let mut vp = ViewportState::default();
        for (w, h) in [(40, 20), (200, 50), (90, 30), (121, 40)] {
            vp.resize(w, h);
        }
        assert_eq!(vp.device_class, DeviceClass::classify(121));
        assert_eq!(vp.orientation, Orientation::classify(121, 40));
    }

    #[test]
    fn test_default_is_standard_terminal() {
        let vp = ViewportState::default();
        assert_eq!(vp.width, 80);
        assert_eq!(vp.height, 24);
        assert_eq!(vp.device_class, DeviceClass::Tablet);
    }
}
