//! Runtime configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

use crate::core::paths;

/// Base URL used when `MATH_TUTOR_API_URL` is unset.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for every request path (e.g. `https://tutor.example.org/api`).
    pub api_base: String,
    /// Where the preference store lives. `None` when no home directory can be resolved.
    pub config_dir: Option<PathBuf>,
}

/// Load configuration from environment. `.env` has already been applied by `main`.
pub fn load() -> Config {
    let api_base = env::var("MATH_TUTOR_API_URL")
        .ok()
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    let config_dir = env::var("MATH_TUTOR_CONFIG_DIR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .or_else(paths::default_config_dir);

    log::debug!(
        "Config loaded: api_base={}, config_dir={:?}",
        api_base,
        config_dir
    );

    Config {
        api_base,
        config_dir,
    }
}
