//! Transient user notifications.
//!
//! Toasts are never persisted; they exist to report the outcome of a side
//! effect (spreadsheet sync, settings save) and disappear after a fixed
//! display window.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::constants::TOAST_TTL_SECS;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing, process-wide.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Toast {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
        }
    }
}

/// Live toasts. Entries expire after [`TOAST_TTL_SECS`] rather than being
/// dismissed explicitly.
#[derive(Default)]
pub struct ToastQueue {
    entries: Vec<(Instant, Toast)>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.entries.push((Instant::now(), toast));
    }

    /// Drop entries older than the display window.
    pub fn purge_expired(&mut self) {
        let ttl = Duration::from_secs(TOAST_TTL_SECS);
        self.entries.retain(|(created, _)| created.elapsed() < ttl);
    }

    /// Take every toast that is still inside its display window.
    pub fn drain_live(&mut self) -> Vec<Toast> {
        self.purge_expired();
        self.entries.drain(..).map(|(_, toast)| toast).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
