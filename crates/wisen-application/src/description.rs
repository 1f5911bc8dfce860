//! Description drafting with a fixed fallback.

use std::sync::Arc;

use wisen_core::generation::DescriptionGenerator;

/// Shown when the collaborator fails for any reason.
pub const GENERATION_FALLBACK: &str =
    "Não foi possível gerar a descrição automática. Por favor, insira manualmente.";

/// Shown when the collaborator answers with no text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Descrição indisponível no momento.";

/// Drafts project descriptions and never fails.
///
/// Without a configured collaborator every request yields
/// [`GENERATION_FALLBACK`].
#[derive(Clone, Default)]
pub struct DescriptionService {
    generator: Option<Arc<dyn DescriptionGenerator>>,
}

impl DescriptionService {
    pub fn new(generator: Arc<dyn DescriptionGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A service with no collaborator.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate(&self, title: &str, category: &str) -> String {
        let Some(generator) = &self.generator else {
            tracing::info!("[Description] No generator configured, using fallback");
            return GENERATION_FALLBACK.to_string();
        };

        match generator.generate(title, category).await {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_FALLBACK.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!("[Description] Generation failed: {}", e);
                GENERATION_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wisen_core::WisenError;
    use wisen_core::error::Result;

    enum Scripted {
        Reply(&'static str),
        Fail,
    }

    #[async_trait]
    impl DescriptionGenerator for Scripted {
        async fn generate(&self, _title: &str, _category: &str) -> Result<String> {
            match self {
                Scripted::Reply(text) => Ok(text.to_string()),
                Scripted::Fail => Err(WisenError::generation("boom")),
            }
        }
    }

    #[tokio::test]
    async fn test_passes_generated_text_through() {
        let service = DescriptionService::new(Arc::new(Scripted::Reply("Texto gerado")));
        assert_eq!(service.generate("T", "C").await, "Texto gerado");
    }

    #[tokio::test]
    async fn test_failure_degrades_to_fallback() {
        let service = DescriptionService::new(Arc::new(Scripted::Fail));
        assert_eq!(service.generate("T", "C").await, GENERATION_FALLBACK);
    }

    #[tokio::test]
    async fn test_empty_reply_uses_unavailable_text() {
        let service = DescriptionService::new(Arc::new(Scripted::Reply("   ")));
        assert_eq!(service.generate("T", "C").await, EMPTY_RESPONSE_FALLBACK);
    }

    #[tokio::test]
    async fn test_disabled_service_uses_fallback() {
        let service = DescriptionService::disabled();
        assert!(!service.is_enabled());
        assert_eq!(service.generate("T", "C").await, GENERATION_FALLBACK);
    }
}
