use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// A message that clears itself once its deadline passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientNotice {
    message: String,
    expires_at: Instant,
}

impl TransientNotice {
    pub fn new(message: impl Into<String>, raised_at: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: raised_at + ttl,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
