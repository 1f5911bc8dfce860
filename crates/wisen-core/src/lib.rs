//! Domain layer for Wisen.
//!
//! Entity models, the in-memory domain stores that own them for a session,
//! and the traits the outer layers implement (durable storage, text
//! generation).

pub mod config;
pub mod error;
pub mod generation;
pub mod id;
pub mod profile;
pub mod project;
pub mod seed;
pub mod storage;

// Re-export common error type
pub use error::WisenError;
pub use id::IdGenerator;
