use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "scriptshelf.toml";
pub const DEFAULT_SCRIPT_URL: &str = "https://github.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Used for the theme when none has been stored yet, in place of the
    /// platform's colour-scheme preference.
    pub prefers_dark: bool,
    /// Link given to new scripts submitted without one.
    pub default_script_url: String,
}

/// Optional overrides read from `scriptshelf.toml` in the data directory.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    prefers_dark: Option<bool>,
    default_script_url: Option<String>,
}

impl AppConfig {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Builds a config for `data_dir`, applying `scriptshelf.toml` if present.
    pub fn load<P: Into<PathBuf>>(data_dir: P) -> Result<Self> {
        let mut config = Self::new(data_dir);
        let path = config.config_path();
        if path.exists() {
            config.apply_file(&path)?;
        }
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        if let Some(prefers_dark) = file.prefers_dark {
            self.prefers_dark = prefers_dark;
        }
        if let Some(url) = file.default_script_url {
            if url.trim().is_empty() {
                return Err(Error::Config(
                    "default_script_url cannot be empty".to_string(),
                ));
            }
            self.default_script_url = url;
        }
        Ok(())
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("scriptshelf.db")
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            prefers_dark: false,
            default_script_url: DEFAULT_SCRIPT_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();

        assert!(!config.prefers_dark);
        assert_eq!(config.default_script_url, DEFAULT_SCRIPT_URL);
        assert_eq!(config.db_path(), dir.path().join("scriptshelf.db"));
    }

    #[test]
    fn test_load_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "prefers_dark = true\ndefault_script_url = \"https://example.com\"\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert!(config.prefers_dark);
        assert_eq!(config.default_script_url, "https://example.com");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "prefers_dark = \"maybe\"").unwrap();

        assert!(matches!(AppConfig::load(dir.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_rejects_empty_default_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "default_script_url = \" \"").unwrap();

        assert!(matches!(AppConfig::load(dir.path()), Err(Error::Config(_))));
    }
}
