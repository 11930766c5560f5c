//! Transient notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Oldest toasts are dropped beyond this count.
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

/// Queue of toasts shown in the bottom-right corner.
#[derive(Debug, Clone, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        });
    }

    /// Drops expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Time until the next toast expires.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let now = Instant::now();
        let mut state = ToastState::new();
        state.push(ToastKind::Success, "Copied", now);
        state.push(ToastKind::Error, "Failed", now + Duration::from_secs(2));

        state.prune(now + TOAST_DURATION);
        let remaining: Vec<_> = state.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["Failed"]);
        assert_eq!(state.next_expiry(now + TOAST_DURATION), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_queue_is_bounded() {
        let now = Instant::now();
        let mut state = ToastState::new();
        for i in 0..6 {
            state.push(ToastKind::Info, format!("toast {}", i), now);
        }
        assert_eq!(state.iter().count(), MAX_TOASTS);
        assert_eq!(state.iter().next().map(|t| t.message.as_str()), Some("toast 2"));
        assert_eq!(state.iter().last().map(|t| t.message.as_str()), Some("toast 5"));
    }
}
