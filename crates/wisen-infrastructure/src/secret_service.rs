//! Secret service implementation.
//!
//! Reads API keys from `secret.json`. The `GEMINI_API_KEY` and `API_KEY`
//! environment variables take precedence over the file.

use std::fs;
use std::path::PathBuf;

use wisen_core::config::{GeminiConfig, SecretConfig};
use wisen_core::error::Result;

const ENV_KEYS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone)]
pub struct SecretService {
    path: PathBuf,
}

impl SecretService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads `secret.json`. A missing file yields an empty configuration.
    pub fn load_secrets(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SecretConfig::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Resolves Gemini credentials, or `None` when no usable key exists.
    ///
    /// Secrets are never logged; only their absence is.
    pub fn gemini_credentials(&self) -> Option<GeminiConfig> {
        let from_file = match self.load_secrets() {
            Ok(secrets) => secrets.gemini,
            Err(e) => {
                tracing::warn!("[Secrets] Failed to read {}: {}", self.path.display(), e);
                None
            }
        };
        let from_env = env_api_key(|name| std::env::var(name).ok());

        resolve_gemini(from_file, from_env)
    }
}

/// First non-blank key among [`ENV_KEYS`], in order.
fn env_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ENV_KEYS
        .iter()
        .find_map(|name| lookup(*name).filter(|key| !key.trim().is_empty()))
}

fn resolve_gemini(
    from_file: Option<GeminiConfig>,
    from_env: Option<String>,
) -> Option<GeminiConfig> {
    let resolved = match (from_file, from_env) {
        (file, Some(api_key)) => GeminiConfig {
            api_key,
            model_name: file.and_then(|f| f.model_name),
        },
        (Some(file), None) => file,
        (None, None) => return None,
    };

    if resolved.api_key.trim().is_empty() {
        tracing::info!("[Secrets] No Gemini API key configured");
        return None;
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let service = SecretService::new(dir.path().join("secret.json"));
        assert!(service.load_secrets().unwrap().gemini.is_none());
    }

    #[test]
    fn test_reads_gemini_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        fs::write(
            &path,
            r#"{ "gemini": { "api_key": "k-123", "model_name": "gemini-2.5-pro" } }"#,
        )
        .unwrap();

        let secrets = SecretService::new(path).load_secrets().unwrap();
        let gemini = secrets.gemini.unwrap();
        assert_eq!(gemini.api_key, "k-123");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_env_key_wins_but_keeps_file_model() {
        let file = GeminiConfig {
            api_key: "file-key".to_string(),
            model_name: Some("m".to_string()),
        };
        let resolved = resolve_gemini(Some(file), Some("env-key".to_string())).unwrap();
        assert_eq!(resolved.api_key, "env-key");
        assert_eq!(resolved.model_name.as_deref(), Some("m"));
    }

    #[test]
    fn test_blank_gemini_env_key_falls_through_to_api_key() {
        let key = env_api_key(|name| match name {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            "API_KEY" => Some("api-key".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("api-key"));
    }

    #[test]
    fn test_gemini_env_key_takes_precedence() {
        let key = env_api_key(|name| Some(format!("{name}-value")));
        assert_eq!(key.as_deref(), Some("GEMINI_API_KEY-value"));
        assert!(env_api_key(|_| None).is_none());
    }

    #[test]
    fn test_blank_key_is_unusable() {
        let file = GeminiConfig {
            api_key: "  ".to_string(),
            model_name: None,
        };
        assert!(resolve_gemini(Some(file), None).is_none());
        assert!(resolve_gemini(None, None).is_none());
    }
}
