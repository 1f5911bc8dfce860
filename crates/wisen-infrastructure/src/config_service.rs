//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`. A missing file is
//! created with defaults; a file that cannot be parsed is reported and the
//! defaults are used instead.

use std::fs;
use std::path::PathBuf;

use wisen_core::config::AppConfig;
use wisen_core::error::Result;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, falling back to defaults on any failure.
    pub fn load(&self) -> AppConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "[Config] Failed to load {}: {}; using defaults",
                    self.path.display(),
                    e
                );
                AppConfig::default()
            }
        }
    }

    /// Loads the configuration, creating the file with defaults when absent.
    pub fn try_load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            let config = AppConfig::default();
            self.save(&config)?;
            tracing::info!("[Config] Created default config at {}", self.path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let service = ConfigService::new(path.clone());

        assert_eq!(service.try_load().unwrap(), AppConfig::default());
        assert!(path.exists());
        assert_eq!(service.try_load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_overrides_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor]\nnotice_duration_ms = 500\n").unwrap();

        let config = ConfigService::new(path).load();
        assert_eq!(config.editor.notice_duration_ms, 500);
        assert_eq!(config.auth.login_delay_ms, 800);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth\nlogin_delay_ms = ").unwrap();

        let service = ConfigService::new(path);
        assert!(service.try_load().is_err());
        assert_eq!(service.load(), AppConfig::default());
    }
}
