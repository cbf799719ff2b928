//! Persistence of user preferences (e.g. answer input mode) in ~/.config/math-tutor/.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::paths;

/// Errors when reading or writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to access preferences: {0}")]
    Io(#[from] io::Error),
    #[error("Preferences file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key/value store for small user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// JSON object in `preferences.json` under a config directory.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: Option<PathBuf>,
}

impl FilePreferenceStore {
    /// Store rooted at `dir`. `None` behaves as an empty, read-only store.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Path of the backing file, if a directory is configured.
    pub fn path(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(paths::preferences_path)
    }

    /// Read the whole map. Missing directory or file reads as empty (first run).
    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let Some(path) = self.path() else {
            return Ok(BTreeMap::new());
        };
        let data = match fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let dir = self.dir.as_ref().ok_or(PreferenceError::NoConfigDir)?;
        fs::create_dir_all(dir)?;
        let path = paths::preferences_path(dir);
        let json = serde_json::to_string_pretty(map)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = match self.load() {
            Ok(map) => map,
            Err(PreferenceError::Corrupt(e)) => {
                log::warn!("Discarding corrupt preferences file: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
