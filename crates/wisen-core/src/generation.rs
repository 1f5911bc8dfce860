//! Text generation collaborator trait.

use async_trait::async_trait;

use crate::error::Result;

/// Drafts a short marketing description for a portfolio project.
///
/// Implementations talk to an external model. Callers are expected to treat
/// every error as recoverable.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Generates a description from the project's title and category.
    async fn generate(&self, title: &str, category: &str) -> Result<String>;
}
