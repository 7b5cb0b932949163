//! Transient toast notifications.
//!
//! There is a single error slot (re-showing replaces the message and restarts
//! its timer) and an unbounded stack of success toasts.

use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notifications {
    error: Option<Toast>,
    successes: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant, ttl: Duration) {
        let id = self.bump();
        self.error = Some(Toast {
            id,
            level: ToastLevel::Error,
            message: message.into(),
            expires_at: now + ttl,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant, ttl: Duration) {
        let id = self.bump();
        self.successes.push(Toast {
            id,
            level: ToastLevel::Success,
            message: message.into(),
            expires_at: now + ttl,
        });
    }

    /// Drop every toast whose lifetime has elapsed at `now`.
    pub fn prune(&mut self, now: Instant) {
        if self.error.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.error = None;
        }
        self.successes.retain(|t| t.expires_at > now);
    }

    pub fn current_error(&self) -> Option<&Toast> {
        self.error.as_ref()
    }

    pub fn successes(&self) -> &[Toast] {
        &self.successes
    }

    /// Visible toasts, error first, then successes oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.error.iter().chain(self.successes.iter())
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.visible().map(|t| t.expires_at).min()
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.successes.is_empty()
    }

    fn bump(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
