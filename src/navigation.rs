//! Navigation registry.
//!
//! The single ordered list of application sections, shared read-only by
//! every navigation renderer (desktop sidebar, mobile drawer, bottom bar)
//! so they can never disagree on the route set or ordering. Adding or
//! removing a destination is a one-line edit here.

use ratatui::style::Color;

/// One navigable application section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Stable identifier
    pub id: &'static str,
    /// Short label shown next to the icon
    pub label: &'static str,
    /// Route path on the SQL-Flow backend
    pub path: &'static str,
    /// Glyph shown when the section is inactive
    pub icon: &'static str,
    /// Glyph shown when the section is active
    pub active_icon: &'static str,
    /// Accent color for the active state
    pub color: Color,
}

/// Ordered application sections, defined once at compile time.
pub const NAV_ITEMS: [NavigationItem; 5] = [
    NavigationItem {
        id: "dashboard",
        label: "Home",
        path: "/dashboard",
        icon: "○",
        active_icon: "●",
        color: Color::Blue,
    },
    NavigationItem {
        id: "lessons",
        label: "Lessons",
        path: "/lessons",
        icon: "▢",
        active_icon: "▣",
        color: Color::Green,
    },
    NavigationItem {
        id: "practice",
        label: "Practice",
        path: "/practice",
        icon: "◇",
        active_icon: "◆",
        color: Color::Magenta,
    },
    NavigationItem {
        id: "achievements",
        label: "Awards",
        path: "/achievements",
        icon: "☆",
        active_icon: "★",
        color: Color::Yellow,
    },
    NavigationItem {
        id: "interview",
        label: "Interview",
        path: "/sql-interview-preparation",
        icon: "▷",
        active_icon: "▶",
        color: Color::Rgb(255, 140, 0),
    },
];

/// Find a section's index by its route path.
pub fn index_of_path(path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.path == path)
}

/// Find a section's index by its identifier.
pub fn index_of_id(id: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            ["dashboard", "lessons", "practice", "achievements", "interview"]
        );
    }

    #[test]
    fn test_ids_and_paths_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in NAV_ITEMS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_index_of_path() {
        assert_eq!(index_of_path("/dashboard"), Some(0));
        assert_eq!(index_of_path("/achievements"), Some(3));
        assert_eq!(index_of_path("/nope"), None);
    }

    #[test]
    fn test_index_of_id() {
        assert_eq!(index_of_id("lessons"), Some(1));
        assert_eq!(index_of_id("interview"), Some(4));
        assert_eq!(index_of_id(""), None);
    }

    #[test]
    fn test_every_item_has_distinct_active_glyph() {
        for item in &NAV_ITEMS {
            assert_ne!(item.icon, item.active_icon, "{} glyphs identical", item.id);
            assert!(!item.label.is_empty());
        }
    }
}
