//! Selection configuration for hiersel
//!
//! Stored as TOML. An explicit path can be given, otherwise
//! `<config dir>/hiersel/config.toml` is used when it exists.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HierselError, Result};

pub use types::{
    PaletteConfig, SelectionConfig, TargetConfig, UnselectAllConfig, DEFAULT_PLACEHOLDER,
};

const CONFIG_DIR: &str = "hiersel";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "HIERSEL_CONFIG_DIR";

impl SelectionConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| HierselError::io_operation("read config", path.display(), e))?;
        let config: SelectionConfig = toml::from_str(&content)?;

        if config.unselect_all.enabled && config.target.columns.is_empty() {
            tracing::warn!(
                path = %path.display(),
                "unselect_all is enabled but no target column is configured"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HierselError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| HierselError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Load the per-user configuration, or defaults when none exists
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Location of the per-user configuration file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    HierselError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::SelectionState;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SelectionConfig::default();
        assert!(!config.unselect_all.enabled);
        assert_eq!(config.unselect_all.placeholder, "No Data");
        assert!(config.target.columns.is_empty());
        assert_eq!(config.palette.color_for(SelectionState::Partial), "lightGreen");
        assert_eq!(config.palette.color_for(SelectionState::Selected), "green");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SelectionConfig = toml::from_str(
            r#"
[unselect_all]
enabled = true

[target]
columns = ["Geo.Region", "Geo.City"]
"#,
        )
        .unwrap();
        assert!(config.unselect_all.enabled);
        assert_eq!(config.unselect_all.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.target.columns.len(), 2);
        assert_eq!(config.palette, PaletteConfig::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = SelectionConfig::default();
        config.unselect_all.placeholder = "(blank)".to_string();
        config.target.columns = vec!["Sales.Country".to_string()];
        config.save(&path).unwrap();

        let loaded = SelectionConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = SelectionConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
