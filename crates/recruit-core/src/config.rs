//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Bootstrap configuration read before anything else.
///
/// Points at the preferences file and sets the log level; everything
/// data-related lives in the preferences instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_title: String,
    pub log_level: String,
    pub user_prefs_file_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "RecruitBook".to_string(),
            log_level: "info".to_string(),
            user_prefs_file_path: PathBuf::from("preferences.toml"),
        }
    }
}
