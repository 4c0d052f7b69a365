//! Durable theme preference.
//!
//! The one preference that survives between invocations is the color
//! theme. It lives behind the [`PreferenceStore`] trait rather than a
//! hardcoded global: the CLI injects a file-backed store, tests inject an
//! in-memory one, and nothing else in the codebase knows where the value
//! sleeps.
//!
//! Unreadable or unrecognized stored values degrade to the default
//! (light) — a corrupt preference file is never an error.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// The two color themes of the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// A minimal injected key-value store for durable preferences.
pub trait PreferenceStore {
    /// Read a stored value, or `None` when absent/unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value durably.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: one file per key under a preferences directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(key), value)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the stored theme, defaulting to light for absent or unrecognized
/// values.
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// Persist a theme choice.
pub fn save_theme(store: &mut dyn PreferenceStore, mode: ThemeMode) -> io::Result<()> {
    store.set(THEME_KEY, mode.as_str())
}

/// Flip the stored theme and return the new value.
pub fn toggle_theme(store: &mut dyn PreferenceStore) -> io::Result<ThemeMode> {
    let next = load_theme(store).toggled();
    save_theme(store, next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_theme_is_light() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn saved_theme_round_trips() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, ThemeMode::Dark).unwrap();
        assert_eq!(load_theme(&store), ThemeMode::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(toggle_theme(&mut store).unwrap(), ThemeMode::Dark);
        assert_eq!(toggle_theme(&mut store).unwrap(), ThemeMode::Light);
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn garbage_value_degrades_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn file_store_survives_reopening() {
        let tmp = TempDir::new().unwrap();
        {
            let mut store = FileStore::new(tmp.path().join("prefs"));
            save_theme(&mut store, ThemeMode::Dark).unwrap();
        }
        let store = FileStore::new(tmp.path().join("prefs"));
        assert_eq!(load_theme(&store), ThemeMode::Dark);
    }

    #[test]
    fn file_store_missing_dir_reads_as_absent() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("nope"));
        assert_eq!(store.get(THEME_KEY), None);
    }
}
