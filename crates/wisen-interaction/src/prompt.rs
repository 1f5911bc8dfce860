//! Prompt template for project descriptions.

use minijinja::{Environment, context};
use wisen_core::WisenError;
use wisen_core::error::Result;

const DESCRIPTION_TEMPLATE: &str = r#"Atue como um especialista em Marketing Digital Sênior.
Escreva uma descrição curta, profissional e persuasiva (máximo {{ max_words }} palavras) para um projeto de portfólio.

Título do Projeto: {{ title }}
Categoria: {{ category }}

A descrição deve focar em resultados e impacto."#;

/// Upper bound on the length of a generated description, in words.
pub const MAX_DESCRIPTION_WORDS: usize = 30;

/// Renders the description prompt for a project.
pub fn render_description_prompt(title: &str, category: &str) -> Result<String> {
    let env = Environment::new();
    env.render_str(
        DESCRIPTION_TEMPLATE,
        context! {
            title => title,
            category => category,
            max_words => MAX_DESCRIPTION_WORDS,
        },
    )
    .map_err(|e| WisenError::generation(format!("Failed to render prompt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_title_and_category() {
        let prompt = render_description_prompt("Campanha Black Friday", "Performance").unwrap();
        assert!(prompt.contains("Título do Projeto: Campanha Black Friday"));
        assert!(prompt.contains("Categoria: Performance"));
        assert!(prompt.contains("máximo 30 palavras"));
    }

    #[test]
    fn test_prompt_does_not_escape_text() {
        let prompt = render_description_prompt("SEO & SEM", "<Growth>").unwrap();
        assert!(prompt.contains("SEO & SEM"));
        assert!(prompt.contains("<Growth>"));
    }
}
