//! User configuration
//!
//! Display defaults live in `~/.config/prettydiff/config.toml`:
//!
//! ```toml
//! [display]
//! diff_only = false
//! show_line_numbers = true
//! trim_new_lines = true
//! tab_width = 4
//! highlight_whitespace = true
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths;
use crate::text::lines::{DEFAULT_TAB_WIDTH, MAX_TAB_WIDTH};

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Rendering preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Rendering preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    /// Show only changed blocks in side-by-side output
    pub diff_only: bool,
    /// Show line number columns in side-by-side output
    pub show_line_numbers: bool,
    /// Drop leading and trailing blank lines of each block
    pub trim_new_lines: bool,
    /// Spaces per tab in side-by-side output, at most 32
    pub tab_width: usize,
    /// Highlight whitespace in inline word and char diffs
    pub highlight_whitespace: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            diff_only: false,
            show_line_numbers: true,
            trim_new_lines: true,
            tab_width: DEFAULT_TAB_WIDTH,
            highlight_whitespace: true,
        }
    }
}

impl DiffConfig {
    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&paths::config_file())
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.display.tab_width > MAX_TAB_WIDTH {
            return Err(ConfigError::TabWidth {
                path: path.to_path_buf(),
                value: config.display.tab_width,
                max: MAX_TAB_WIDTH,
            });
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
