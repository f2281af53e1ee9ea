//! JSON file storage implementation.
//!
//! Stores each collection as one JSON file in the storage directory and
//! rewrites the whole file on every save. Missing or corrupt files are
//! treated as "no data" so a damaged store degrades to empty collections
//! instead of failing startup.

use std::path::{Path, PathBuf};

use questlog_core::{Notification, Task, User, UserId};
use tokio::fs;
use tracing::warn;

use super::{Result, Storage};

const TASKS_FILE: &str = "tasks.json";
const USERS_FILE: &str = "users.json";
const CURRENT_USER_FILE: &str = "current_user.json";
const NOTIFICATIONS_FILE: &str = "notifications.json";

/// File-based JSON snapshot storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    async fn read_snapshot<T>(&self, file: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let path = self.path(file);
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(file, error = %e, "discarding unreadable snapshot");
                Ok(T::default())
            }
        }
    }

    async fn write_snapshot<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), json.as_bytes()).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_tasks(&self) -> Result<Vec<Task>> {
        self.read_snapshot(TASKS_FILE).await
    }

    async fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        self.write_snapshot(TASKS_FILE, &tasks).await
    }

    async fn load_users(&self) -> Result<Vec<User>> {
        self.read_snapshot(USERS_FILE).await
    }

    async fn save_users(&mut self, users: &[User]) -> Result<()> {
        self.write_snapshot(USERS_FILE, &users).await
    }

    async fn load_current_user(&self) -> Result<Option<UserId>> {
        self.read_snapshot(CURRENT_USER_FILE).await
    }

    async fn save_current_user(&mut self, id: Option<UserId>) -> Result<()> {
        self.write_snapshot(CURRENT_USER_FILE, &id).await
    }

    async fn load_notifications(&self) -> Result<Vec<Notification>> {
        self.read_snapshot(NOTIFICATIONS_FILE).await
    }

    async fn save_notifications(&mut self, notifications: &[Notification]) -> Result<()> {
        self.write_snapshot(NOTIFICATIONS_FILE, &notifications).await
    }
}
