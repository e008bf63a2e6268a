// Integration tests for theme preference persistence

use sqlflow::storage;
use sqlflow::theme::{ThemeMode, ThemeStore};
use tempfile::tempdir;

// =============================================================================
// Startup Behavior
// =============================================================================

#[test]
fn test_fresh_install_defaults_to_light() {
    let dir = tempdir().unwrap();
    let store = ThemeStore::init(Some(dir.path().join("theme")));
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn test_restart_restores_persisted_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme");

    {
        let mut store = ThemeStore::init(Some(path.clone()));
        store.toggle(); // light -> dark, persisted
    }

    // New session reads the value back
    let store = ThemeStore::init(Some(path));
    assert_eq!(store.mode(), ThemeMode::Dark);
}

#[test]
fn test_corrupt_preference_falls_back_to_light() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme");
    std::fs::write(&path, "neon\n").unwrap();

    let store = ThemeStore::init(Some(path));
    assert_eq!(store.mode(), ThemeMode::Light);
}

// =============================================================================
// Toggle Properties
// =============================================================================

#[test]
fn test_toggle_is_involutive() {
    let dir = tempdir().unwrap();
    let mut store = ThemeStore::init(Some(dir.path().join("theme")));
    let original = store.mode();

    store.toggle();
    store.toggle();
    assert_eq!(store.mode(), original);
}

#[test]
fn test_persisted_value_tracks_every_toggle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme");
    let mut store = ThemeStore::init(Some(path.clone()));

    for _ in 0..7 {
        let mode = store.toggle();
        let persisted = storage::read_preference(&path).unwrap();
        assert_eq!(persisted.as_deref(), Some(mode.as_str()));
    }
}

#[test]
fn test_palette_changes_in_same_update_as_persistence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme");
    let mut store = ThemeStore::init(Some(path.clone()));
    let light_background = store.palette().background;

    store.toggle();

    // Both the applied palette and the stored value reflect the new mode
    assert_ne!(store.palette().background, light_background);
    assert_eq!(
        storage::read_preference(&path).unwrap().as_deref(),
        Some("dark")
    );
}

// =============================================================================
// Storage Failure
// =============================================================================

#[test]
fn test_unwritable_storage_falls_back_to_in_memory() {
    // A regular file in the parent position makes writes below it fail
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let mut store = ThemeStore::init(Some(blocker.join("theme")));

    // No panic, no error surfaced, mode still flips both ways
    assert_eq!(store.toggle(), ThemeMode::Dark);
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert_eq!(store.toggle(), ThemeMode::Light);
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn test_no_storage_at_all_still_toggles() {
    let mut store = ThemeStore::in_memory(ThemeMode::Light);
    assert_eq!(store.toggle(), ThemeMode::Dark);
    assert_eq!(store.toggle(), ThemeMode::Light);
}
