//! Remote task store client with local fallback.
//!
//! Mirrors the storage collections over a REST backend
//! (`GET/POST/PATCH/DELETE` on `/tasks` and `/users`). Any transport
//! failure downgrades the client to local-storage mode for the rest of the
//! session - no retries, no reconciliation - and the fallback is invisible
//! to callers: the same data comes back either way.

#![warn(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use questlog_core::{Task, TaskId, User, UserId};
use questlog_storage::{Result, Storage};
use reqwest::{Client, ClientBuilder};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// REST client over the task and user collections, with a permanent
/// per-session downgrade to local storage on any transport failure.
pub struct ApiService<S: Storage> {
    client: Client,
    base_url: String,
    use_backend: bool,
    local: Arc<Mutex<S>>,
}

impl<S: Storage> ApiService<S> {
    /// Probe the backend and build a client. If the probe fails the
    /// service starts (and stays) in local mode.
    pub async fn connect(base_url: impl Into<String>, local: Arc<Mutex<S>>) -> Self {
        let base_url = base_url.into();
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();

        let use_backend = match client.get(format!("{}/tasks", base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                info!(error = %e, "backend not available, using local storage");
                false
            }
        };
        debug!(use_backend, "api service ready");

        Self {
            client,
            base_url,
            use_backend,
            local,
        }
    }

    /// Whether the remote backend is still in use.
    pub fn backend_active(&self) -> bool {
        self.use_backend
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn downgrade(&mut self, error: reqwest::Error) {
        warn!(error = %error, "backend error, falling back to local storage");
        self.use_backend = false;
    }

    // === Tasks ===

    /// Fetch the task collection.
    pub async fn get_tasks(&mut self) -> Result<Vec<Task>> {
        if self.use_backend {
            match fetch_json::<Vec<Task>>(&self.client, self.url("/tasks")).await {
                Ok(tasks) => return Ok(tasks),
                Err(e) => self.downgrade(e),
            }
        }
        self.local.lock().await.load_tasks().await
    }

    /// Create a task.
    pub async fn create_task(&mut self, task: &Task) -> Result<Task> {
        if self.use_backend {
            let result = async {
                self.client
                    .post(self.url("/tasks"))
                    .json(task)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Task>()
                    .await
            }
            .await;
            match result {
                Ok(created) => return Ok(created),
                Err(e) => self.downgrade(e),
            }
        }

        let mut local = self.local.lock().await;
        let mut tasks = local.load_tasks().await?;
        tasks.insert(0, task.clone());
        local.save_tasks(&tasks).await?;
        Ok(task.clone())
    }

    /// Replace a task by id. Returns the stored record, or None if the id
    /// is unknown locally.
    pub async fn update_task(&mut self, id: TaskId, task: &Task) -> Result<Option<Task>> {
        if self.use_backend {
            let result = async {
                self.client
                    .patch(self.url(&format!("/tasks/{}", id)))
                    .json(task)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Task>()
                    .await
            }
            .await;
            match result {
                Ok(updated) => return Ok(Some(updated)),
                Err(e) => self.downgrade(e),
            }
        }

        let mut local = self.local.lock().await;
        let mut tasks = local.load_tasks().await?;
        let Some(slot) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        *slot = task.clone();
        local.save_tasks(&tasks).await?;
        Ok(Some(task.clone()))
    }

    /// Delete a task by id.
    pub async fn delete_task(&mut self, id: TaskId) -> Result<bool> {
        if self.use_backend {
            let result = async {
                self.client
                    .delete(self.url(&format!("/tasks/{}", id)))
                    .send()
                    .await?
                    .error_for_status()
            }
            .await;
            match result {
                Ok(_) => return Ok(true),
                Err(e) => self.downgrade(e),
            }
        }

        let mut local = self.local.lock().await;
        let mut tasks = local.load_tasks().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        let removed = tasks.len() != before;
        local.save_tasks(&tasks).await?;
        Ok(removed)
    }

    // === Users ===

    /// Fetch the user collection.
    pub async fn get_users(&mut self) -> Result<Vec<User>> {
        if self.use_backend {
            match fetch_json::<Vec<User>>(&self.client, self.url("/users")).await {
                Ok(users) => return Ok(users),
                Err(e) => self.downgrade(e),
            }
        }
        self.local.lock().await.load_users().await
    }

    /// Create a user.
    pub async fn create_user(&mut self, user: &User) -> Result<User> {
        if self.use_backend {
            let result = async {
                self.client
                    .post(self.url("/users"))
                    .json(user)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<User>()
                    .await
            }
            .await;
            match result {
                Ok(created) => return Ok(created),
                Err(e) => self.downgrade(e),
            }
        }

        let mut local = self.local.lock().await;
        let mut users = local.load_users().await?;
        users.push(user.clone());
        local.save_users(&users).await?;
        Ok(user.clone())
    }

    /// Replace a user by id. Returns the stored record, or None if the id
    /// is unknown locally.
    pub async fn update_user(&mut self, id: UserId, user: &User) -> Result<Option<User>> {
        if self.use_backend {
            let result = async {
                self.client
                    .patch(self.url(&format!("/users/{}", id)))
                    .json(user)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<User>()
                    .await
            }
            .await;
            match result {
                Ok(updated) => return Ok(Some(updated)),
                Err(e) => self.downgrade(e),
            }
        }

        let mut local = self.local.lock().await;
        let mut users = local.load_users().await?;
        let Some(slot) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        *slot = user.clone();
        local.save_users(&users).await?;
        Ok(Some(user.clone()))
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: String,
) -> std::result::Result<T, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await
}
