//! Configuration types.
//!
//! `AppConfig` is read from `config.toml`; `SecretConfig` from `secret.json`.
//! Every field has a default so a missing or partial file still yields a
//! complete configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Root configuration of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
}

/// Settings for the simulated sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Simulated round-trip delay of `login`, in milliseconds.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    800
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl AuthSettings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

/// Settings for the admin editing workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// How long a success notice stays visible, in milliseconds.
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,
    /// Base of the random stock photo used when no cover is given.
    #[serde(default = "default_placeholder_image_base")]
    pub placeholder_image_base: String,
}

fn default_notice_duration_ms() -> u64 {
    3000
}

fn default_placeholder_image_base() -> String {
    "https://picsum.photos/800/600".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            notice_duration_ms: default_notice_duration_ms(),
            placeholder_image_base: default_placeholder_image_base(),
        }
    }
}

impl EditorSettings {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

/// Settings for the description generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

/// Secrets loaded from `secret.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[auth]\nlogin_delay_ms = 10\n").unwrap();
        assert_eq!(config.auth.login_delay(), Duration::from_millis(10));
        assert_eq!(config.editor.notice_duration(), Duration::from_secs(3));
        assert_eq!(config.generation.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.auth.login_delay_ms, 800);
    }
}
