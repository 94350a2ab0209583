//! Filesystem locations used by prettydiff
//!
//! ```text
//! ~/.config/prettydiff/
//! └── config.toml               # Display defaults
//! ```
//!
//! `PRETTYDIFF_CONFIG` points at a different file.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "PRETTYDIFF_CONFIG";

/// Config filename inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Application directory name under the platform config dir
const APP_DIR: &str = "prettydiff";

/// Get the global config directory (`~/.config/prettydiff` on Linux).
///
/// Falls back to `./.prettydiff` when the platform has no config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".prettydiff"), |dir| dir.join(APP_DIR))
}

/// Get the config file path, honoring `PRETTYDIFF_CONFIG`.
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join(CONFIG_FILE),
    }
}
