//! Storage trait abstraction.

use async_trait::async_trait;
use questlog_core::{Notification, Task, User, UserId};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error. Only raised when writing; unreadable data on
    /// load is demoted to "no data".
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for QuestLog data.
///
/// Each collection is persisted as a full snapshot overwritten on every
/// change; there is no incremental diffing and no transactional guarantee
/// between collections.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Task operations ===

    /// Load the full task list. Missing or unreadable data yields an empty
    /// list.
    async fn load_tasks(&self) -> Result<Vec<Task>>;

    /// Overwrite the full task list.
    async fn save_tasks(&mut self, tasks: &[Task]) -> Result<()>;

    // === User operations ===

    /// Load the full user list.
    async fn load_users(&self) -> Result<Vec<User>>;

    /// Overwrite the full user list.
    async fn save_users(&mut self, users: &[User]) -> Result<()>;

    /// Load the current-user pointer.
    async fn load_current_user(&self) -> Result<Option<UserId>>;

    /// Overwrite the current-user pointer.
    async fn save_current_user(&mut self, id: Option<UserId>) -> Result<()>;

    // === Notification operations ===

    /// Load the notification queue.
    async fn load_notifications(&self) -> Result<Vec<Notification>>;

    /// Overwrite the notification queue.
    async fn save_notifications(&mut self, notifications: &[Notification]) -> Result<()>;
}
