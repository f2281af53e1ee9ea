//! Notification model - short-lived UI feedback messages.

use crate::id::NotificationId;
use crate::Time;
use serde::{Deserialize, Serialize};

/// The queue keeps at most this many entries, newest first.
pub const MAX_PENDING_NOTIFICATIONS: usize = 5;

/// A toast-style message produced by the event handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,

    /// Message text
    pub message: String,

    /// Severity/visual kind
    pub kind: NotificationKind,

    /// When it was raised
    pub timestamp: Time,

    /// Whether the user has seen it
    pub read: bool,
}

impl Notification {
    /// Create a new unread notification.
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Time) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            kind,
            timestamp: now,
            read: false,
        }
    }
}

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Neutral information
    Info,
    /// Positive outcome (reward, level up)
    Success,
    /// Needs attention
    Warning,
    /// Something failed
    Error,
}
