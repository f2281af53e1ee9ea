//! QuestLog core data models.
//!
//! This crate defines the data structures shared by the progression engine,
//! the storage layer, and the CLI: users with their RPG-style stat blocks,
//! tasks ("quests"), exercise measurements, and the notification queue.

#![warn(missing_docs)]

// Core identities
mod id;

// Progression state
mod stats;
mod user;

// Units of work
mod task;
mod exercise;

// UI feedback queue
mod notification;

// Re-exports
pub use id::*;

pub use stats::{Stat, StatBoosts};
pub use user::{RealityStats, User};

pub use task::{Category, Complexity, Priority, Task};
pub use exercise::{Difficulty, Measurement};

pub use notification::{Notification, NotificationKind, MAX_PENDING_NOTIFICATIONS};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
