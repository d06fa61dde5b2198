//! Persisted client preference
//!
//! A single dark-mode flag stored as JSON, read at startup and toggled from
//! the UI. Missing or unreadable files fall back to the default (light).
//! The flag has no effect on validation or upload behavior.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PREFS_FILE: &str = ".upload-portal/prefs.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Prefs {
    /// Preference file location: `$PORTAL_PREFS_PATH` when set, otherwise
    /// `~/.upload-portal/prefs.json`.
    pub fn path() -> PathBuf {
        if let Ok(path) = std::env::var("PORTAL_PREFS_PATH") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home).join(PREFS_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load preferences, falling back to defaults on a missing or corrupt
    /// file.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %path.display(), "Corrupt prefs file, using defaults");
                Prefs::default()
            }),
            Err(_) => Prefs::default(),
        }
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        std::fs::write(path, contents)
    }
}
