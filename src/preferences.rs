//! Display preference storage.
//!
//! The gender tab is the only persisted setting. It lives in a small JSON
//! key-value file under the `preferred_gender` key, is read once at startup
//! and rewritten on every change. Other keys found in the file are kept as-is.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::types::Gender;

/// Key under which the gender preference is stored
pub const PREFERENCE_KEY: &str = "preferred_gender";

/// File name inside the config directory
const PREFERENCE_FILE: &str = "preferences.json";

/// Loaded preference store.
///
/// Owned by the app and passed by reference to render code.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    /// Backing file; `None` keeps everything in memory
    path: Option<PathBuf>,
    /// Raw key-value entries as found on disk, of any JSON type
    entries: Map<String, Value>,
    gender: Gender,
}

impl Preferences {
    /// Load preferences from `path`.
    ///
    /// Never fails: a missing or unreadable file, malformed JSON, or an
    /// unknown gender token all fall back to [`Gender::Male`].
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                if path.exists() {
                    warn!("Ignoring preference file {:?}: {:#}", path, e);
                } else {
                    debug!("No preference file at {:?}", path);
                }
                Map::new()
            }
        };

        let gender = match entries.get(PREFERENCE_KEY) {
            Some(value) => value
                .as_str()
                .and_then(|token| token.parse().ok())
                .unwrap_or_else(|| {
                    warn!("Unknown {} value {}, using male", PREFERENCE_KEY, value);
                    Gender::default()
                }),
            None => Gender::default(),
        };
        info!(%gender, "Loaded display preference");

        Self {
            path: Some(path),
            entries,
            gender,
        }
    }

    /// Preferences that are never written to disk
    pub fn in_memory(gender: Gender) -> Self {
        Self {
            path: None,
            entries: Map::new(),
            gender,
        }
    }

    /// Current gender tab
    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Change the gender tab and persist it.
    ///
    /// Returns whether the value changed. Setting the current value is a
    /// no-op and does not touch the file.
    pub fn set_gender(&mut self, gender: Gender) -> Result<bool> {
        if gender == self.gender {
            return Ok(false);
        }
        self.gender = gender;
        self.entries
            .insert(PREFERENCE_KEY.to_string(), Value::from(gender.to_string()));
        self.save()?;
        info!(%gender, "Display preference changed");
        Ok(true)
    }

    /// Write all entries to the backing file (no-op when in memory)
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preference directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize preferences to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write preferences to {:?}", path))?;

        debug!("Saved preferences to {:?}", path);
        Ok(())
    }

    /// Default preference file location.
    ///
    /// `$XDG_CONFIG_HOME/salontui/preferences.json`, else
    /// `$HOME/.config/salontui/preferences.json`, else `./preferences.json`.
    pub fn default_path() -> PathBuf {
        resolve_default_path(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }
}

fn read_entries(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences from {:?}", path))?;
    let entries =
        serde_json::from_str(&content).context("Failed to parse preferences JSON")?;
    Ok(entries)
}

fn resolve_default_path(xdg_config: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = xdg_config
        .filter(|p| p.is_absolute())
        .or_else(|| home.map(|h| h.join(".config")));
    match base {
        Some(dir) => dir.join("salontui").join(PREFERENCE_FILE),
        None => PathBuf::from(PREFERENCE_FILE),
    }
}
