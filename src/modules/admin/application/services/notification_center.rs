use std::{
    sync::{PoisonError, RwLock},
    time::Duration,
};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::admin::application::domain::{Notice, NoticeKind};

/// Holds the latest operator notice. A new notice replaces the previous one;
/// a notice older than the time-to-live is no longer reported.
pub struct NotificationCenter {
    ttl: TimeDelta,
    current: RwLock<Option<Notice>>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::seconds(3)),
            current: RwLock::new(None),
        }
    }

    pub fn success(&self, text: impl Into<String>) -> Notice {
        self.show_at(NoticeKind::Success, text, Utc::now())
    }

    pub fn error(&self, text: impl Into<String>) -> Notice {
        self.show_at(NoticeKind::Error, text, Utc::now())
    }

    /// Error notice carrying the failure text, or `fallback` when it has none.
    pub fn failure(&self, err: &impl ToString, fallback: &str) -> Notice {
        let text = err.to_string();
        if text.trim().is_empty() {
            self.error(fallback)
        } else {
            self.error(text)
        }
    }

    pub fn show_at(&self, kind: NoticeKind, text: impl Into<String>, now: DateTime<Utc>) -> Notice {
        let notice = Notice {
            kind,
            text: text.into(),
            shown_at: now,
            expires_at: now + self.ttl,
        };
        debug!(kind = ?notice.kind, text = %notice.text, "Notice shown");

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(notice.clone());
        notice
    }

    pub fn active(&self) -> Option<Notice> {
        self.active_at(Utc::now())
    }

    pub fn active_at(&self, now: DateTime<Utc>) -> Option<Notice> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|notice| notice.is_active_at(now))
            .cloned()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}
