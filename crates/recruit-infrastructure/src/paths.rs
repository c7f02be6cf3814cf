//! Unified path management for recruit configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/recruit/           # Config directory
//! ├── config.toml              # Application configuration
//! └── preferences.toml         # Default user preferences location
//! data/                        # Book files (relative to the working dir,
//! ├── candidatebook.json       # configurable through preferences)
//! └── companybook.json
//! ```

use std::path::PathBuf;

use recruit_core::error::{RecruitError, Result};

/// Unified path resolution for recruit.
pub struct RecruitPaths;

impl RecruitPaths {
    /// Returns the recruit configuration directory.
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g. `~/.config/recruit/`)
    /// - `Err`: Could not determine the platform config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("recruit"))
            .ok_or_else(|| RecruitError::io("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path to the preferences file.
    pub fn default_prefs_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("preferences.toml"))
    }
}
