//! External collaborators for Wisen.
//!
//! Currently a single one: the Gemini-backed project description generator.

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiDescriptionGenerator;
