//! Centralized path helpers for the config directory and the files kept in it.

use std::path::{Path, PathBuf};

use crate::core::app;

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Platform config directory (~/.config/math-tutor/).
pub fn default_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Preference file inside a config directory.
pub fn preferences_path(config_dir: &Path) -> PathBuf {
    config_dir.join("preferences.json")
}
