//! User-visible notifications.
//!
//! The gateway returns failures as values. `Reporter` is the one place that
//! turns them into notices, so every failure is shown exactly once no
//! matter which screen made the call.

use std::sync::{Arc, Mutex};

use tracing::{error, info};

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Sends notices to the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Error => error!(text = %notice.text, "Notification"),
            Level::Info | Level::Success => info!(text = %notice.text, "Notification"),
        }
    }
}

/// Keeps every notice in memory. Clones share the same list.
#[derive(Debug, Default, Clone)]
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
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == Level::Error)
            .map(|n| n.text)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(notice);
    }
}

#[derive(Clone)]
pub struct Reporter {
    notifier: Arc<dyn Notifier>,
}

impl Reporter {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Notify once for a failure and hand the result back unchanged
    pub fn report<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ref e) = result {
            self.notifier.notify(Notice::error(e.user_message()));
        }
        result
    }

    pub fn success(&self, text: &str) {
        self.notifier.notify(Notice::success(text));
    }

    pub fn info(&self, text: &str) {
        self.notifier.notify(Notice::info(text));
    }
}
