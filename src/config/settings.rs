use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DashgenError, ErrorContext, Result};

/// Main dashgen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashgenConfig {
    pub ui: UiConfig,
    pub output: OutputConfig,
}

/// UI and display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether to show colored output
    pub colored: bool,
    /// Whether to show progress spinners
    pub progress_bars: bool,
    /// Whether to show banners and animations
    pub animations: bool,
}

/// Where the scaffold is written when no --root is given
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default target root (falls back to the working directory)
    pub root: Option<PathBuf>,
}

impl Default for DashgenConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colored: std::env::var("NO_COLOR").is_err(),
            progress_bars: true,
            animations: true,
        }
    }
}

impl DashgenConfig {
    /// Load configuration from file or create default
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_io_context(|| format!("reading config file {}", config_path.display()))?;

            toml::from_str(&content).map_err(|e| DashgenError::Config {
                message: format!("Invalid TOML: {}", e),
                path: Some(config_path.to_path_buf()),
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_io_context(|| format!("creating config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| DashgenError::Config {
            message: format!("Failed to serialize config: {}", e),
            path: Some(config_path.to_path_buf()),
        })?;

        fs::write(config_path, content)
            .with_io_context(|| format!("writing config file {}", config_path.display()))?;

        Ok(())
    }

    /// Load global configuration
    pub fn load_global() -> Result<Self> {
        let config_path = Self::global_config_path()?;
        Self::load(config_path)
    }

    /// Save global configuration
    pub fn save_global(&self) -> Result<()> {
        let config_path = Self::global_config_path()?;
        self.save(config_path)
    }

    /// Get global configuration file path (~/.dashgen/config.toml)
    pub fn global_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| DashgenError::Config {
            message: "HOME environment variable not set".to_string(),
            path: None,
        })?;
        Ok(Path::new(&home).join(".dashgen").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempdir().unwrap();
        let config = DashgenConfig::load(tmp.path().join("config.toml")).unwrap();
        assert!(config.ui.progress_bars);
        assert!(config.output.root.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = DashgenConfig::default();
        config.ui.animations = false;
        config.output.root = Some(PathBuf::from("/srv/frontend"));
        config.save(&path).unwrap();

        let loaded = DashgenConfig::load(&path).unwrap();
        assert!(!loaded.ui.animations);
        assert_eq!(loaded.output.root, Some(PathBuf::from("/srv/frontend")));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "ui = \"not a table\"").unwrap();

        let err = DashgenConfig::load(&path).unwrap_err();
        assert!(matches!(err, DashgenError::Config { .. }));
    }
}
