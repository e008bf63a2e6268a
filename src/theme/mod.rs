//! Theme mode store.
//!
//! This module provides [`ThemeMode`] and [`ThemeStore`], the owner of the
//! light/dark preference. The preference is read once at startup and
//! written back on every toggle; when the preference file cannot be
//! written the store degrades to in-memory-only state for the session and
//! the toggle still takes effect visually.

use std::path::PathBuf;

use crate::storage;
use crate::ui::theme::{Palette, DARK_PALETTE, LIGHT_PALETTE};

/// Light or dark rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The serialized preference value.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored preference value. Unknown values return `None` so the
    /// caller falls back to the default.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Process-wide owner of the theme preference.
///
/// There is exactly one writer of the preference file: this store. Tests
/// construct isolated instances against temporary paths.
#[derive(Debug)]
pub struct ThemeStore {
    mode: ThemeMode,
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// Read the persisted preference once and build the store.
    ///
    /// Missing or unreadable preferences fall back to light mode; an
    /// unreadable file additionally disables persistence for the session
    /// rather than failing startup.
    pub fn init(path: Option<PathBuf>) -> Self {
        let mode = match &path {
            Some(p) => match storage::read_preference(p) {
                Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_default(),
                Ok(None) => ThemeMode::default(),
                Err(e) => {
                    tracing::warn!("theme preference unreadable, using default: {e:#}");
                    ThemeMode::default()
                }
            },
            None => ThemeMode::default(),
        };
        Self { mode, path }
    }

    /// Build an in-memory-only store starting from the given mode.
    pub fn in_memory(mode: ThemeMode) -> Self {
        Self { mode, path: None }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette for the current mode; render functions consult this every
    /// frame, so a toggle is visible in the same update that persists it.
    pub fn palette(&self) -> &'static Palette {
        match self.mode {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }

    /// Flip the mode, persist the new value, and return it.
    ///
    /// Persistence failure is logged and swallowed: the in-memory mode has
    /// already flipped and the session continues without durability.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        if let Some(path) = &self.path {
            if let Err(e) = storage::write_preference(path, self.mode.as_str()) {
                tracing::warn!("theme preference not persisted: {e:#}");
            }
        }
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mode_round_trip() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("blue"), None);
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn test_init_defaults_to_light_when_absent() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::init(Some(dir.path().join("theme")));
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_init_reads_persisted_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        storage::write_preference(&path, "dark").unwrap();
        let store = ThemeStore::init(Some(path));
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_init_garbage_preference_falls_back_to_light() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        storage::write_preference(&path, "solarized").unwrap();
        let store = ThemeStore::init(Some(path));
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_involutive() {
        let mut store = ThemeStore::in_memory(ThemeMode::Light);
        let original = store.mode();
        store.toggle();
        store.toggle();
        assert_eq!(store.mode(), original);
    }

    #[test]
    fn test_toggle_persists_each_mutation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        let mut store = ThemeStore::init(Some(path.clone()));

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(
            storage::read_preference(&path).unwrap().as_deref(),
            Some("dark")
        );

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(
            storage::read_preference(&path).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_persisted_value_matches_after_toggle_sequence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        let mut store = ThemeStore::init(Some(path.clone()));

        for _ in 0..5 {
            store.toggle();
        }
        assert_eq!(
            storage::read_preference(&path).unwrap().as_deref(),
            Some(store.mode().as_str())
        );
    }

    #[test]
    fn test_toggle_survives_unwritable_path() {
        // A file used as a directory makes every write below it fail
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("theme");

        let mut store = ThemeStore::init(Some(path));
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_palette_tracks_mode() {
        let mut store = ThemeStore::in_memory(ThemeMode::Light);
        let light = store.palette();
        store.toggle();
        let dark = store.palette();
        assert_ne!(light.background, dark.background);
    }
}
