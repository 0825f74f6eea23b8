//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the application subfolder created under the temp base.
pub const TEMP_ROOT_NAME: &str = "facefusion";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub temp: TempConfig,
}

/// Temp-space configuration read by the filesystem helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempConfig {
    /// File extension of extracted frame images (without dot).
    #[serde(default = "default_temp_frame_format")]
    pub temp_frame_format: String,

    /// Whether `clear_temp` leaves the temp directory in place.
    #[serde(default)]
    pub keep_temp: bool,

    /// Base directory for temp space. Defaults to the OS temp directory.
    #[serde(default)]
    pub temp_directory: Option<PathBuf>,

    /// Append a hash of the full target path to temp directory names so
    /// targets sharing a basename get separate directories.
    #[serde(default)]
    pub qualify_by_path_hash: bool,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self {
            temp_frame_format: default_temp_frame_format(),
            keep_temp: false,
            temp_directory: None,
            qualify_by_path_hash: false,
        }
    }
}

impl TempConfig {
    /// Get the effective temp root: `<temp base>/facefusion`.
    pub fn temp_root(&self) -> PathBuf {
        self.temp_directory
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(TEMP_ROOT_NAME)
    }
}

fn default_temp_frame_format() -> String {
    "png".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not exist.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        match Self::load(path) {
            Ok(config) => Ok(Some(config)),
            Err(Error::Config(_)) if !path.exists() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = TempConfig::default();
        assert_eq!(config.temp_frame_format, "png");
        assert!(!config.keep_temp);
        assert_eq!(
            config.temp_root(),
            std::env::temp_dir().join(TEMP_ROOT_NAME)
        );
    }

    #[test]
    fn test_temp_root_override() {
        let config = TempConfig {
            temp_directory: Some(PathBuf::from("/scratch")),
            ..Default::default()
        };
        assert_eq!(config.temp_root(), PathBuf::from("/scratch/facefusion"));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facefusion.toml");
        fs::write(&path, "[temp]\ntemp_frame_format = \"jpg\"\nkeep_temp = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.temp.temp_frame_format, "jpg");
        assert!(config.temp.keep_temp);
        assert_eq!(config.temp.temp_directory, None);
        assert!(!config.temp.qualify_by_path_hash);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facefusion.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_if_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facefusion.toml");
        assert_eq!(Config::load_if_exists(&path).unwrap(), None);

        fs::write(&path, "[temp]\nkeep_temp = true\n").unwrap();
        let config = Config::load_if_exists(&path).unwrap().unwrap();
        assert!(config.temp.keep_temp);

        fs::write(&path, "[temp\n").unwrap();
        assert!(matches!(
            Config::load_if_exists(&path).unwrap_err(),
            Error::TomlParse(_)
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facefusion.toml");
        let mut config = Config::default();
        config.temp.temp_directory = Some(PathBuf::from("/var/tmp"));
        config.temp.qualify_by_path_hash = true;

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
