//! User preferences persisted between runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Window placement and size, irrelevant to the core but round-tripped
/// through the preferences file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740,
            window_height: 600,
            window_x: None,
            window_y: None,
        }
    }
}

/// User preferences: the configured document file paths plus display settings.
///
/// The core only needs the two document-file paths out of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    pub candidate_book_file_path: PathBuf,
    pub company_book_file_path: PathBuf,
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            candidate_book_file_path: PathBuf::from("data/candidatebook.json"),
            company_book_file_path: PathBuf::from("data/companybook.json"),
            gui: GuiSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_data_directory() {
        let prefs = UserPrefs::default();
        assert_eq!(
            prefs.candidate_book_file_path,
            PathBuf::from("data/candidatebook.json")
        );
        assert_eq!(
            prefs.company_book_file_path,
            PathBuf::from("data/companybook.json")
        );
    }

    #[test]
    fn gui_settings_default_when_missing_from_file() {
        let parsed: UserPrefs = toml::from_str(
            r#"
candidate_book_file_path = "a.json"
company_book_file_path = "b.json"
"#,
        )
        .unwrap();
        assert_eq!(parsed.gui, GuiSettings::default());
    }
}
