//! Transient user-facing notices ("toasts").
//!
//! Views report outcomes through a [`Notifier`]. Delivery is fire-and-forget:
//! a notifier never fails and never blocks the operation that raised the notice.

use std::sync::{Arc, Mutex};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::Success(message.into()));
    }

    fn error(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::Error(message.into()));
    }
}

/// Writes notices to the log. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(message) => info!(%message, "Notice"),
            Notice::Error(message) => warn!(%message, "Notice"),
        }
    }
}

/// Keeps every notice in memory so tests can assert on them.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(Notice::is_error)
            .map(|notice| notice.message().to_string())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| !notice.is_error())
            .map(|notice| notice.message().to_string())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}
