//! GeminiDescriptionGenerator - Direct REST API implementation for Gemini.
//!
//! Sends a single `generateContent` request per description. No retries and
//! no timeout beyond the HTTP client's own defaults.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use wisen_core::WisenError;
use wisen_core::config::{DEFAULT_GEMINI_MODEL, GeminiConfig};
use wisen_core::error::Result;
use wisen_core::generation::DescriptionGenerator;

use crate::prompt::render_description_prompt;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Description generator backed by the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiDescriptionGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiDescriptionGenerator {
    /// Creates a generator with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Builds a generator from loaded credentials. The credential's model
    /// wins over `fallback_model`.
    pub fn from_config(config: GeminiConfig, fallback_model: Option<&str>) -> Self {
        let model = config
            .model_name
            .or_else(|| fallback_model.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        Self::new(config.api_key, model)
    }

    /// Points the generator at another endpoint root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| WisenError::generation(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            WisenError::generation(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiDescriptionGenerator {
    async fn generate(&self, title: &str, category: &str) -> Result<String> {
        let prompt = render_description_prompt(title, category)?;
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("[Gemini] Requesting description from model {}", self.model);
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Returns the first text part of the first candidate, trimmed.
///
/// A response without any text is an empty string, not an error; callers
/// decide how to present it.
fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    let candidates = response.candidates.ok_or_else(|| {
        WisenError::generation("Gemini API returned no candidates in the response")
    })?;

    Ok(candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .map(|text| text.trim().to_string())
        .unwrap_or_default())
}

fn map_http_error(status: StatusCode, body: String) -> WisenError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    WisenError::generation(format!("Gemini API returned {}: {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extracts_first_text_part() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"  Resultados reais. \n"}]}}]}"#,
        );
        assert_eq!(extract_text_response(response).unwrap(), "Resultados reais.");
    }

    #[test]
    fn test_candidate_without_text_is_empty() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#);
        assert_eq!(extract_text_response(response).unwrap(), "");
    }

    #[test]
    fn test_missing_candidates_is_error() {
        assert!(extract_text_response(parse("{}")).is_err());
    }

    #[test]
    fn test_http_error_uses_api_message() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        let err = map_http_error(StatusCode::FORBIDDEN, body.to_string());
        assert_eq!(
            err.to_string(),
            "Generation error: Gemini API returned 403: PERMISSION_DENIED: API key not valid"
        );
    }

    #[test]
    fn test_http_error_with_plain_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().ends_with("502: upstream down"));
    }

    #[test]
    fn test_from_config_prefers_credential_model() {
        let config = GeminiConfig {
            api_key: "k".to_string(),
            model_name: None,
        };
        let generator = GeminiDescriptionGenerator::from_config(config, Some("gemini-x"));
        assert_eq!(generator.model(), "gemini-x");

        let config = GeminiConfig {
            api_key: "k".to_string(),
            model_name: Some("gemini-y".to_string()),
        };
        let generator = GeminiDescriptionGenerator::from_config(config, Some("gemini-x"));
        assert_eq!(generator.model(), "gemini-y");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let generator =
            GeminiDescriptionGenerator::new("k", "m").with_base_url("http://127.0.0.1:9/v1beta");
        let result = generator.generate("Título", "Categoria").await;
        assert!(matches!(result, Err(WisenError::Generation(_))));
    }
}
