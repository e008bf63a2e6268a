//! Preference and data-directory storage.
//!
//! The theme preference is a single durable key: a small file holding
//! `"light"` or `"dark"`. Log files live in the same per-user directory.

use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::path::PathBuf;

/// Get the per-user data directory for the application.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("no local data directory on this platform"))?;
    let dir = base.join("sqlflow");
    if !dir.exists() {
        fs::create_dir_all(&dir).wrap_err("Failed to create data directory")?;
    }
    Ok(dir)
}

/// Path of the theme preference file.
pub fn theme_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("theme"))
}

/// Path of the log file.
pub fn log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("sqlflow.log"))
}

/// Read a raw preference value, `None` when the key has never been written.
pub fn read_preference(path: &PathBuf) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read preference from {:?}", path))?;
    Ok(Some(raw.trim().to_string()))
}

/// Write a raw preference value.
pub fn write_preference(path: &PathBuf, value: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {:?}", parent))?;
        }
    }
    fs::write(path, value).wrap_err_with(|| format!("Failed to write preference to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_preference_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        assert!(read_preference(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        write_preference(&path, "dark").unwrap();
        assert_eq!(read_preference(&path).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_read_trims_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "light\n").unwrap();
        assert_eq!(read_preference(&path).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_write_creates_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("theme");
        write_preference(&path, "dark").unwrap();
        assert_eq!(read_preference(&path).unwrap().as_deref(), Some("dark"));
    }
}
