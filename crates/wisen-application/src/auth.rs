//! Session flag store.
//!
//! Holds the single "is authenticated" flag that gates the admin panel. The
//! credential check is a named stub: [`AcceptNonEmpty`] admits any non-empty
//! email/password pair. Swap in a real [`CredentialVerifier`] to harden it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use wisen_core::storage::{AUTH_FLAG_KEY, DurableStorage};

const AUTH_FLAG_VALUE: &str = "true";

/// Decides whether a sign-in attempt is accepted.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Placeholder verifier: accepts any pair of non-empty inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptNonEmpty;

impl CredentialVerifier for AcceptNonEmpty {
    fn verify(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && !password.is_empty()
    }
}

/// Owns the authentication flag and its durable copy.
pub struct SessionFlagStore {
    authenticated: AtomicBool,
    storage: Arc<dyn DurableStorage>,
    verifier: Box<dyn CredentialVerifier>,
    login_delay: Duration,
}

impl SessionFlagStore {
    /// Initializes the flag from durable storage.
    ///
    /// Only the literal value `"true"` counts as signed in; an absent,
    /// malformed or unreadable record starts the session signed out.
    pub async fn restore(storage: Arc<dyn DurableStorage>, login_delay: Duration) -> Self {
        let authenticated = match storage.get(AUTH_FLAG_KEY).await {
            Ok(value) => value.as_deref() == Some(AUTH_FLAG_VALUE),
            Err(e) => {
                tracing::warn!("[Auth] Failed to read persisted flag: {}", e);
                false
            }
        };
        tracing::info!("[Auth] Restored session flag: authenticated={}", authenticated);

        Self {
            authenticated: AtomicBool::new(authenticated),
            storage,
            verifier: Box::new(AcceptNonEmpty),
            login_delay,
        }
    }

    /// Replaces the credential check.
    pub fn with_verifier(mut self, verifier: impl CredentialVerifier + 'static) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Simulates a sign-in round trip.
    ///
    /// Waits the configured delay, then accepts or rejects. A rejection
    /// leaves the flag untouched. A failure to persist an accepted sign-in
    /// is logged; the session stays signed in.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        tokio::time::sleep(self.login_delay).await;

        if !self.verifier.verify(email, password) {
            tracing::info!("[Auth] Sign-in rejected");
            return false;
        }

        self.authenticated.store(true, Ordering::SeqCst);
        if let Err(e) = self.storage.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE).await {
            tracing::warn!("[Auth] Failed to persist session flag: {}", e);
        }
        tracing::info!("[Auth] Signed in");
        true
    }

    /// Clears the flag and its durable copy.
    ///
    /// The in-memory flag is cleared before the storage is touched, so the
    /// gate closes even if the removal fails.
    pub async fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        if let Err(e) = self.storage.remove(AUTH_FLAG_KEY).await {
            tracing::warn!("[Auth] Failed to clear persisted flag: {}", e);
        }
        tracing::info!("[Auth] Signed out");
    }
}
