use std::time::Duration;
use tokio::time::Instant;

/// A transient message that disappears on its own after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_active(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_ttl() {
        let notice = Notice::new("Salvo", Duration::from_secs(3));
        assert!(notice.is_active());

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(notice.is_active());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!notice.is_active());
    }
}
