//! Responsive Layout Policy
//!
//! The single authoritative breakpoint table for the whole application,
//! plus the `LayoutContext` that render functions consult for proportional
//! sizing. Every layout-affecting component goes through this module;
//! per-component threshold tables are a correctness bug because sibling
//! components end up classifying the same viewport differently.

// ============================================================================
// Breakpoints
// ============================================================================

/// Terminal width/height breakpoints for responsive layouts.
pub mod breakpoints {
    /// Minimum width (columns) classified as a tablet viewport.
    pub const TABLET_MIN_WIDTH: u16 = 80;
    /// Minimum width (columns) classified as a desktop viewport.
    pub const DESKTOP_MIN_WIDTH: u16 = 120;

    /// Short terminal height (< 24 rows) where vertical chrome is condensed.
    pub const SHORT_HEIGHT: u16 = 24;

    /// Scroll offset (content lines) below which the bottom navigation is
    /// always visible regardless of scroll direction.
    pub const NAV_HIDE_MIN_OFFSET: usize = 100;
}

// ============================================================================
// Device Classification
// ============================================================================

/// Discrete device class derived from viewport width.
///
/// The three classes partition `[0, u16::MAX]` with no gaps or overlaps:
/// mobile is `< 80` columns, tablet is `80..120`, desktop is `>= 120`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in columns.
    ///
    /// Pure and total: every width maps to exactly one class.
    pub fn classify(width: u16) -> Self {
        if width < breakpoints::TABLET_MIN_WIDTH {
            DeviceClass::Mobile
        } else if width < breakpoints::DESKTOP_MIN_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Whether this class uses the compact (hamburger + bottom nav) shell.
    pub fn is_compact_shell(self) -> bool {
        matches!(self, DeviceClass::Mobile | DeviceClass::Tablet)
    }
}

/// Viewport orientation derived from the width/height ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Portrait when the viewport is taller than it is wide.
    pub fn classify(width: u16, height: u16) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding viewport dimensions for responsive calculations.
///
/// Passed to all render functions so sizing decisions share one source of
/// truth. Helpers here are pure functions of the stored dimensions.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.device_class().is_compact_shell() {
///     // hamburger header + bottom navigation
/// } else {
///     // persistent sidebar + top header
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Viewport width in columns
    pub width: u16,
    /// Viewport height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Device class for the current width.
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::classify(self.width)
    }

    /// Orientation for the current dimensions.
    pub fn orientation(&self) -> Orientation {
        Orientation::classify(self.width, self.height)
    }

    /// Check if the viewport classifies as mobile.
    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }

    /// Check if the viewport classifies as desktop.
    pub fn is_desktop(&self) -> bool {
        self.device_class() == DeviceClass::Desktop
    }

    /// Check if the terminal is short on rows (< 24).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    // ========================================================================
    // Derived Sizing
    // ========================================================================

    /// Outer padding (columns/rows) around content areas.
    pub fn spacing(&self) -> u16 {
        match self.device_class() {
            DeviceClass::Mobile => 1,
            DeviceClass::Tablet => 2,
            DeviceClass::Desktop => 3,
        }
    }

    /// Number of columns for card grids (stats, achievements, lessons).
    pub fn grid_columns(&self) -> u16 {
        match self.device_class() {
            DeviceClass::Mobile => 1,
            DeviceClass::Tablet => 2,
            DeviceClass::Desktop => 3,
        }
    }

    /// Maximum display length for a title/label before truncation.
    pub fn max_title_length(&self) -> usize {
        match self.device_class() {
            DeviceClass::Mobile => 24,
            DeviceClass::Tablet => 40,
            DeviceClass::Desktop => 64,
        }
    }

    /// Width of the persistent desktop sidebar.
    pub fn sidebar_width(&self) -> u16 {
        // 24% of the viewport, kept within a readable band
        ((self.width as u32 * 24 / 100) as u16).clamp(20, 34)
    }

    /// Width of the mobile slide-in drawer.
    pub fn drawer_width(&self) -> u16 {
        // Most of the viewport, leaving a visible backdrop strip
        ((self.width as u32 * 75 / 100) as u16).clamp(18, 40).min(self.width)
    }

    /// Height of the top header bar.
    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    /// Height of the bottom navigation bar.
    pub fn bottom_nav_height(&self) -> u16 {
        3
    }

    /// Height reserved for the connectivity banner when one is shown.
    pub fn banner_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    // ========================================================================
    // Content Area Calculations
    // ========================================================================

    /// Usable content width after borders and outer spacing.
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(2 + self.spacing() * 2)
    }

    /// Usable content height after the given amount of vertical chrome.
    pub fn content_height(&self, chrome_height: u16) -> u16 {
        self.height.saturating_sub(chrome_height)
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
