//! In-memory storage backend.
//!
//! Keeps the same snapshot semantics as the JSON backend without touching
//! the filesystem. Used by engine and API tests.

use questlog_core::{Notification, Task, User, UserId};

use super::{Result, Storage};

/// Volatile storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tasks: Vec<Task>,
    users: Vec<User>,
    current_user: Option<UserId>,
    notifications: Vec<Notification>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    async fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        self.tasks = tasks.to_vec();
        Ok(())
    }

    async fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn save_users(&mut self, users: &[User]) -> Result<()> {
        self.users = users.to_vec();
        Ok(())
    }

    async fn load_current_user(&self) -> Result<Option<UserId>> {
        Ok(self.current_user)
    }

    async fn save_current_user(&mut self, id: Option<UserId>) -> Result<()> {
        self.current_user = id;
        Ok(())
    }

    async fn load_notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.clone())
    }

    async fn save_notifications(&mut self, notifications: &[Notification]) -> Result<()> {
        self.notifications = notifications.to_vec();
        Ok(())
    }
}
