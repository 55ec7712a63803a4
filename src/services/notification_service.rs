//! Transient toast notifications shown over the main window.
//!
//! Holds at most [`MAX_NOTIFICATIONS`] entries; pushing past the limit drops
//! the oldest one.

use crate::config::{DEFAULT_NOTIFICATION_DURATION, MAX_NOTIFICATIONS};
use log::info;
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Assigned by the queue on push.
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub duration: Duration,
    /// Persistent toasts stay until dismissed.
    pub persistent: bool,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            severity,
            title: title.into(),
            message: message.into(),
            duration: DEFAULT_NOTIFICATION_DURATION,
            persistent: false,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }
}

/// Bounded list of visible toasts, oldest first.
#[derive(Debug)]
pub struct NotificationQueue {
    visible: VecDeque<Notification>,
    next_id: u64,
    capacity: usize,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_NOTIFICATIONS)
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visible: VecDeque::with_capacity(capacity),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Adds a notification and returns it with its assigned id.
    pub fn push(&mut self, mut notification: Notification) -> Notification {
        notification.id = self.next_id;
        self.next_id += 1;

        while self.visible.len() >= self.capacity {
            self.visible.pop_front();
        }

        info!(
            "[{}] {}: {}",
            notification.severity, notification.title, notification.message
        );
        self.visible.push_back(notification.clone());
        notification
    }

    /// Removes a notification; returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }
}
