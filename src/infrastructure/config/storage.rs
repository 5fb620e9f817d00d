//! `config.toml` discovery and loading.
//!
//! Loading happens before the log subscriber exists, so nothing here logs.
//! [`ConfigOrigin`] reports what happened and `main` logs it afterwards.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration storage errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory for this user.
    #[error("could not locate a config directory")]
    ConfigDirNotFound,
    /// Reading or writing the file failed.
    #[error("config file {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Default configuration could not be encoded.
    #[error("could not encode default config: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Parsed from an existing file.
    File(PathBuf),
    /// File was missing; defaults were written there.
    CreatedDefault(PathBuf),
    /// File exists but does not parse; defaults are used and the file is kept.
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Configuration plus how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Effective file configuration, before CLI overrides.
    pub config: AppConfig,
    /// Where it came from.
    pub origin: ConfigOrigin,
}

/// Resolves the config file location and reads it.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory (e.g. `~/.config/ecoleta`).
    ///
    /// # Errors
    /// Returns [`ConfigError::ConfigDirNotFound`] if the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Uses `config_dir` instead of the platform directory.
    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Loads `path_override` if given, otherwise `config.toml` in the config dir.
    ///
    /// A missing file is created with defaults. A malformed file is left as is
    /// and defaults are returned with [`ConfigOrigin::Malformed`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or the default
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !path.exists() {
            let config = AppConfig::default();
            write_atomically(&path, &toml::to_string_pretty(&config)?)?;
            return Ok(LoadedConfig {
                config,
                origin: ConfigOrigin::CreatedDefault(path),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        Ok(match toml::from_str::<AppConfig>(&content) {
            Ok(config) => LoadedConfig {
                config,
                origin: ConfigOrigin::File(path),
            },
            Err(e) => LoadedConfig {
                config: AppConfig::default(),
                origin: ConfigOrigin::Malformed {
                    path,
                    reason: e.message().to_string(),
                },
            },
        })
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| ConfigError::io(path, e))?;
    temp.persist(path).map_err(|e| ConfigError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("ecoleta");
        let manager = StorageManager::with_dir(config_dir.clone());

        let loaded = manager.load_config(None).unwrap();

        let config_file = config_dir.join(CONFIG_FILE_NAME);
        assert_eq!(loaded.origin, ConfigOrigin::CreatedDefault(config_file.clone()));
        assert_eq!(loaded.config.api.request_timeout_secs, 30);
        let written = fs::read_to_string(&config_file).unwrap();
        assert!(written.contains("servicodados.ibge.gov.br"));
    }

    #[test]
    fn test_existing_file_is_parsed() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_file, "log_level = \"debug\"\n[ui]\nfuzzy_filter = false\n").unwrap();

        let loaded = manager.load_config(None).unwrap();

        assert_eq!(loaded.origin, ConfigOrigin::File(config_file));
        assert_eq!(loaded.config.log_level, LogLevel::Debug);
        assert!(!loaded.config.ui.fuzzy_filter);
    }

    #[test]
    fn test_malformed_file_reports_reason_and_is_kept() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_file, "invalid_toml = [").unwrap();

        let loaded = manager.load_config(None).unwrap();

        assert_eq!(loaded.config.log_level, LogLevel::Info);
        match loaded.origin {
            ConfigOrigin::Malformed { path, reason } => {
                assert_eq!(path, config_file);
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed origin, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&config_file).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_override_path_skips_config_dir() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[api]\nbase_url = \"http://127.0.0.1:9000/localidades\"\n").unwrap();

        let loaded = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(loaded.config.api.base_url, "http://127.0.0.1:9000/localidades");
        assert!(!dir.path().join("unused").exists());
    }
}
