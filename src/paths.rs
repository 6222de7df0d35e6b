//! Centralized path definitions for git-matsuri
//!
//! ## Layout
//!
//! ```text
//! ~/.git-matsuri/
//! └── config.toml               # organization, board and cycle settings
//! ```
//!
//! `MATSURI_CONFIG` points at an alternative config file.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "MATSURI_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".git-matsuri";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global git-matsuri directory.
///
/// Returns `~/.git-matsuri/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `$MATSURI_CONFIG` when set, otherwise `~/.git-matsuri/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| global_config_dir().join(GLOBAL_CONFIG_FILE), PathBuf::from)
}
