//! Infrastructure layer for Wisen: file locations, configuration and
//! secret loading, and the durable storage implementations.

pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::WisenPaths;
pub use crate::secret_service::SecretService;
pub use crate::storage::{FileStorage, MemoryStorage};
