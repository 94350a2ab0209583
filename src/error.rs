//! Library error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the user configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {}", path.display())]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::DiffConfig`]
    #[error("invalid config {}", path.display())]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// `display.tab_width` is wider than [`crate::text::lines::MAX_TAB_WIDTH`]
    #[error("invalid config {}: tab_width {value} exceeds {max}", path.display())]
    TabWidth {
        /// Path of the config file
        path: PathBuf,
        /// Configured width
        value: usize,
        /// Largest accepted width
        max: usize,
    },
}
