use std::time::{Duration, Instant};

/// How long a notice stays visible before it hides itself
pub const NOTICE_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing message raised by a controller trigger
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    visible: bool,
    raised_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::raise(message.into(), NoticeKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::raise(message.into(), NoticeKind::Error)
    }

    fn raise(message: String, kind: NoticeKind) -> Self {
        Self {
            message,
            kind,
            visible: true,
            raised_at: Instant::now(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTICE_TTL
    }

    /// Time left before auto-hide, used to schedule the next repaint
    pub fn remaining(&self, now: Instant) -> Duration {
        NOTICE_TTL.saturating_sub(now.saturating_duration_since(self.raised_at))
    }
}
