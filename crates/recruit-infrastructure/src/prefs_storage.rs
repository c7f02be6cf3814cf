//! TOML file storage for user preferences and application config.
//!
//! Same read contract as the book files: absent is `Ok(None)`, unparsable is
//! a `Format` error, unreadable is an `Io` error.

use std::fs;
use std::path::Path;

use recruit_core::config::AppConfig;
use recruit_core::error::{RecruitError, Result};
use recruit_core::prefs::UserPrefs;

pub fn read_user_prefs(path: &Path) -> Result<Option<UserPrefs>> {
    read_toml(path)
}

pub fn save_user_prefs(prefs: &UserPrefs, path: &Path) -> Result<()> {
    write_toml(path, toml::to_string_pretty(prefs)?)
}

pub fn read_config(path: &Path) -> Result<Option<AppConfig>> {
    read_toml(path)
}

pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    write_toml(path, toml::to_string_pretty(config)?)
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| RecruitError::io(format!("Failed to read {}: {}", path.display(), e)))?;
    let value = toml::from_str(&content)?;
    Ok(Some(value))
}

fn write_toml(path: &Path, content: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                RecruitError::io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    fs::write(path, content)
        .map_err(|e| RecruitError::io(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn prefs_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = UserPrefs::default();
        prefs.candidate_book_file_path = PathBuf::from("elsewhere/candidates.json");
        prefs.gui.window_x = Some(120);

        save_user_prefs(&prefs, &path).unwrap();
        assert_eq!(read_user_prefs(&path).unwrap().unwrap(), prefs);
    }

    #[test]
    fn config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig::default();
        save_config(&config, &path).unwrap();
        assert_eq!(read_config(&path).unwrap().unwrap(), config);
    }

    #[test]
    fn missing_files_read_as_none() {
        let dir = tempdir().unwrap();
        assert_eq!(read_user_prefs(&dir.path().join("p.toml")).unwrap(), None);
        assert_eq!(read_config(&dir.path().join("c.toml")).unwrap(), None);
    }

    #[test]
    fn unparsable_prefs_are_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "candidate_book_file_path = [not toml").unwrap();
        assert!(read_user_prefs(&path).unwrap_err().is_format());
    }
}
