//! Durable key/value storage trait.
//!
//! The only state that outlives a session is the authentication flag. It is
//! kept as a plain string under a single key, so the storage contract is a
//! minimal string map.

use async_trait::async_trait;

use crate::error::Result;

/// Storage key holding `"true"` while the admin is signed in.
pub const AUTH_FLAG_KEY: &str = "wisen_auth";

/// Durable string storage shared across sessions.
#[async_trait]
pub trait DurableStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}
