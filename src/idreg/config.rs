use crate::error::{IdregError, Result};
use crate::password::DEFAULT_PASSWORD_LENGTH;
use crate::store::fs::DEFAULT_USERS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for idreg, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdregConfig {
    /// File name of the registry document inside the data directory
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// Length used by `password generate` when none is given
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_string()
}

fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

impl Default for IdregConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            password_length: default_password_length(),
        }
    }
}

impl IdregConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(IdregError::Io)?;
        let config: IdregConfig =
            serde_json::from_str(&content).map_err(IdregError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(IdregError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(IdregError::Serialization)?;
        fs::write(config_path, content).map_err(IdregError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = IdregConfig::default();
        assert_eq!(config.users_file, "users.json");
        assert_eq!(config.password_length, 12);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = IdregConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, IdregConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");

        let config = IdregConfig {
            users_file: "people.json".to_string(),
            password_length: 20,
        };
        config.save(&nested).unwrap();

        let loaded = IdregConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"password_length": 16}"#,
        )
        .unwrap();

        let config = IdregConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.users_file, "users.json");
        assert_eq!(config.password_length, 16);
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "nope").unwrap();
        assert!(matches!(
            IdregConfig::load(temp_dir.path()),
            Err(IdregError::Serialization(_))
        ));
    }
}
