use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CtpError, Result};

pub const APP_NAME: &str = "credit-transaction-parser";

/// Optional overrides read from `~/.config/credit-transaction-parser/settings.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub desktop_dir: Option<String>,
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default)]
    pub whitelist_dir: Option<String>,
}

impl Settings {
    /// Directory scanned for statement exports.
    pub fn desktop_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.desktop_dir {
            return Ok(PathBuf::from(shellexpand_path(dir)));
        }
        dirs::desktop_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
            .ok_or(CtpError::NoDesktop)
    }

    /// Archive destination for consumed statements.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => PathBuf::from(shellexpand_path(dir)),
            None => default_data_dir(),
        }
    }

    /// `None` means the whitelists compiled into the binary are used.
    pub fn whitelist_dir(&self) -> Option<PathBuf> {
        self.whitelist_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand_path(dir)))
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(APP_NAME)
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| CtpError::Settings(format!("{}: {e}", path.display())))
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert!(s.desktop_dir.is_none());
        assert!(s.whitelist_dir().is_none());
        assert!(s.data_dir().ends_with(APP_NAME));
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"desktop_dir": "/tmp/statements"}"#).unwrap();
        let s = load_settings_from(&path).unwrap();
        assert_eq!(s.desktop_dir().unwrap(), PathBuf::from("/tmp/statements"));
        assert!(s.data_dir.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(CtpError::Settings(_))));
    }

    #[test]
    fn test_shellexpand_leaves_absolute_paths() {
        assert_eq!(shellexpand_path("/var/data"), "/var/data");
    }
}
