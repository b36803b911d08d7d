use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_COLUMN_TITLE: &str = "New column";
const DEFAULT_CARD_TITLE: &str = "New task";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_column_title: Option<String>,
    #[serde(default)]
    pub default_card_title: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("kanban"))
                .unwrap_or_else(|| PathBuf::from(".kanban"))
        })
    }

    pub fn effective_column_title(&self) -> &str {
        self.default_column_title
            .as_deref()
            .unwrap_or(DEFAULT_COLUMN_TITLE)
    }

    pub fn effective_card_title(&self) -> &str {
        self.default_card_title
            .as_deref()
            .unwrap_or(DEFAULT_CARD_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_column_title(), "New column");
        assert_eq!(config.effective_card_title(), "New task");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/boards\"\ndefault_column_title = \"Backlog\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/boards"));
        assert_eq!(config.effective_column_title(), "Backlog");
        assert_eq!(config.effective_card_title(), "New task");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = [not toml").unwrap();

        let config = AppConfig::load_from(&path);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.default_card_title.is_none());
    }
}
