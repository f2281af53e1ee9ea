//! Quest service - storage-backed orchestration of the event handlers.

use std::sync::Arc;

use chrono::NaiveDate;
use questlog_core::{
    Category, Complexity, Difficulty, Notification, NotificationKind, Priority, StatBoosts, Task,
    TaskId, User, MAX_PENDING_NOTIFICATIONS,
};
use questlog_progression::ExerciseDef;
use questlog_storage::{Storage, StorageError};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::merge::{
    apply_exercise, apply_task_completion, mark_completed, mark_reopened, CompletionAward,
    ExerciseAward,
};

/// Error type for service operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by [`QuestService`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Unknown task id
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// An operation needed a current user and none is selected
    #[error("no current user")]
    NoCurrentUser,
}

/// Specification for creating a task.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    /// Task title
    pub title: String,
    /// Detailed description
    pub description: String,
    /// Threat level
    pub priority: Priority,
    /// Quest rank
    pub complexity: Complexity,
    /// Category for stat boosts
    pub category: Category,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Optional deadline
    pub due_date: Option<NaiveDate>,
    /// Rough effort estimate
    pub estimated_hours: f32,
}

/// Result of toggling a task.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// The task after the toggle
    pub task: Task,
    /// Present when the toggle was incomplete -> complete with a current
    /// user to credit
    pub award: Option<CompletionAward>,
}

/// Result of logging an exercise.
#[derive(Debug, Clone)]
pub struct ExerciseOutcome {
    /// The user after the award
    pub user: User,
    /// What the exercise awarded
    pub award: ExerciseAward,
}

/// Storage-backed task and progression service.
///
/// All mutation is synchronous over in-memory state; snapshots are written
/// after the state settles, with no transactional guarantee between
/// collections.
pub struct QuestService<S: Storage> {
    storage: Arc<Mutex<S>>,
}

impl<S: Storage + 'static> QuestService<S> {
    /// Create a new service over a storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    /// Shared handle to the underlying storage.
    pub fn storage(&self) -> Arc<Mutex<S>> {
        self.storage.clone()
    }

    /// Ensure a current user exists, creating the default record on first
    /// launch.
    pub async fn bootstrap(&self) -> Result<User> {
        let mut storage = self.storage.lock().await;
        let mut users = storage.load_users().await?;

        if let Some(id) = storage.load_current_user().await? {
            if let Some(user) = users.iter().find(|u| u.id == id) {
                return Ok(user.clone());
            }
        }

        if users.is_empty() {
            let user = User::new("Default User", "user@questlog.dev", chrono::Utc::now());
            users.push(user.clone());
            storage.save_users(&users).await?;
            storage.save_current_user(Some(user.id)).await?;
            info!(user = %user.id, "created default user");
            return Ok(user);
        }

        // Stale or missing pointer: fall back to the first user on record.
        let user = users[0].clone();
        storage.save_current_user(Some(user.id)).await?;
        Ok(user)
    }

    /// The current user, if one is selected.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let storage = self.storage.lock().await;
        let Some(id) = storage.load_current_user().await? else {
            return Ok(None);
        };
        let users = storage.load_users().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Create a task assigned to the current user.
    pub async fn create_task(&self, spec: TaskSpec) -> Result<Task> {
        let now = chrono::Utc::now();
        let mut storage = self.storage.lock().await;
        let user_id = storage.load_current_user().await?;

        let task = Task {
            id: TaskId::new(),
            title: spec.title,
            description: spec.description,
            priority: spec.priority,
            complexity: spec.complexity,
            category: spec.category,
            tags: spec.tags,
            due_date: spec.due_date,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
            user_id,
            estimated_hours: spec.estimated_hours,
        };

        let mut tasks = storage.load_tasks().await?;
        tasks.insert(0, task.clone());
        storage.save_tasks(&tasks).await?;
        debug!(task = %task.id, "created task");

        push_notification(
            &mut *storage,
            "Task created successfully!",
            NotificationKind::Success,
        )
        .await?;

        Ok(task)
    }

    /// The full task list.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.storage.lock().await.load_tasks().await?)
    }

    /// Toggle a task's completion state.
    ///
    /// The incomplete -> complete transition awards XP and stat boosts to
    /// the current user; the reverse transition only clears the flags.
    pub async fn toggle_task(&self, id: TaskId) -> Result<ToggleOutcome> {
        let now = chrono::Utc::now();
        let mut storage = self.storage.lock().await;
        let mut tasks = storage.load_tasks().await?;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(EngineError::TaskNotFound(id))?;

        if tasks[index].completed {
            mark_reopened(&mut tasks[index], now);
            storage.save_tasks(&tasks).await?;
            return Ok(ToggleOutcome {
                task: tasks[index].clone(),
                award: None,
            });
        }

        mark_completed(&mut tasks[index], now);

        let mut award = None;
        let current = storage.load_current_user().await?;
        if let Some(user_id) = current {
            let completed = tasks[index].clone();
            let mut users = storage.load_users().await?;
            if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
                let completion = apply_task_completion(user, &completed, &tasks, now);

                let mut messages = vec![(format_award(completion.xp, &completion.boosts),
                    NotificationKind::Success)];
                if let Some(level_up) = &completion.level_up {
                    messages.push((
                        format!("Level up! You are now level {}", level_up.new_level),
                        NotificationKind::Success,
                    ));
                    info!(
                        old = level_up.old_level,
                        new = level_up.new_level,
                        "level up"
                    );
                }

                storage.save_users(&users).await?;
                for (message, kind) in messages {
                    push_notification(&mut *storage, message, kind).await?;
                }
                award = Some(completion);
            }
        }

        storage.save_tasks(&tasks).await?;
        Ok(ToggleOutcome {
            task: tasks[index].clone(),
            award,
        })
    }

    /// Delete a task. Returns false if the id is unknown.
    pub async fn delete_task(&self, id: TaskId) -> Result<bool> {
        let mut storage = self.storage.lock().await;
        let mut tasks = storage.load_tasks().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        storage.save_tasks(&tasks).await?;
        push_notification(&mut *storage, "Task deleted", NotificationKind::Info).await?;
        Ok(true)
    }

    /// Log an exercise performance for the current user.
    pub async fn log_exercise(
        &self,
        exercise: &ExerciseDef,
        value: u32,
        difficulty: Difficulty,
    ) -> Result<ExerciseOutcome> {
        let now = chrono::Utc::now();
        let mut storage = self.storage.lock().await;
        let user_id = storage
            .load_current_user()
            .await?
            .ok_or(EngineError::NoCurrentUser)?;

        let tasks = storage.load_tasks().await?;
        let mut users = storage.load_users().await?;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(EngineError::NoCurrentUser)?;

        let award = apply_exercise(user, exercise, value, difficulty, &tasks, now);
        let outcome = ExerciseOutcome {
            user: user.clone(),
            award: award.clone(),
        };

        storage.save_users(&users).await?;
        push_notification(
            &mut *storage,
            format!(
                "{} logged: {} {} - {}",
                exercise.name,
                value,
                exercise.measurement.unit(),
                format_award(award.xp, &award.boosts)
            ),
            NotificationKind::Success,
        )
        .await?;

        Ok(outcome)
    }

    /// The pending notification queue, newest first.
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.storage.lock().await.load_notifications().await?)
    }
}

// "+300 XP, +9 Strength, +6 Physical Endurance" or "+25 XP earned!" when
// no stat moved.
fn format_award(xp: u64, boosts: &StatBoosts) -> String {
    let gains: Vec<String> = boosts
        .gains()
        .into_iter()
        .map(|(stat, value)| format!("+{} {}", value, stat.name()))
        .collect();

    if gains.is_empty() {
        format!("+{} XP earned!", xp)
    } else {
        format!("+{} XP, {}", xp, gains.join(", "))
    }
}

async fn push_notification<S: Storage + ?Sized>(
    storage: &mut S,
    message: impl Into<String>,
    kind: NotificationKind,
) -> Result<()> {
    let mut queue = storage.load_notifications().await?;
    queue.insert(
        0,
        Notification::new(message, kind, chrono::Utc::now()),
    );
    queue.truncate(MAX_PENDING_NOTIFICATIONS);
    storage.save_notifications(&queue).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use questlog_storage::MemoryStorage;

    fn spec(priority: Priority, complexity: Complexity, category: Category) -> TaskSpec {
        TaskSpec {
            title: "quest".to_string(),
            description: String::new(),
            priority,
            complexity,
            category,
            tags: vec![],
            due_date: None,
            estimated_hours: 1.0,
        }
    }

    #[tokio::test]
    async fn test_bootstrap_creates_default_user_once() {
        let service = QuestService::new(MemoryStorage::new());
        let first = service.bootstrap().await.unwrap();
        assert_eq!(first.name, "Default User");
        assert_eq!(first.level, 1);

        let second = service.bootstrap().await.unwrap();
        assert_eq!(second.id, first.id);
    }

    #[tokio::test]
    async fn test_create_assigns_current_user_and_prepends() {
        let service = QuestService::new(MemoryStorage::new());
        let user = service.bootstrap().await.unwrap();

        service
            .create_task(spec(Priority::Low, Complexity::Simple, Category::Work))
            .await
            .unwrap();
        let second = service
            .create_task(spec(Priority::High, Complexity::Epic, Category::Fitness))
            .await
            .unwrap();

        let tasks = service.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, second.id); // newest first
        assert_eq!(tasks[0].user_id, Some(user.id));
    }

    #[tokio::test]
    async fn test_toggle_awards_and_persists() {
        let service = QuestService::new(MemoryStorage::new());
        service.bootstrap().await.unwrap();
        let task = service
            .create_task(spec(Priority::High, Complexity::Epic, Category::Fitness))
            .await
            .unwrap();

        let outcome = service.toggle_task(task.id).await.unwrap();
        assert!(outcome.task.completed);
        assert!(outcome.task.completed_at.is_some());
        let award = outcome.award.expect("completion credited");
        assert_eq!(award.xp, 300);

        let user = service.current_user().await.unwrap().unwrap();
        assert_eq!(user.xp, 300);
        assert_eq!(user.level, 3);
        assert_eq!(user.reality_stats.strength, 9);
        assert_eq!(user.tasks_completed, 1);
    }

    #[tokio::test]
    async fn test_toggle_off_keeps_rewards_and_doubling_on_recompletion() {
        let service = QuestService::new(MemoryStorage::new());
        service.bootstrap().await.unwrap();
        let task = service
            .create_task(spec(Priority::Medium, Complexity::Normal, Category::Other))
            .await
            .unwrap();

        service.toggle_task(task.id).await.unwrap();
        let reopened = service.toggle_task(task.id).await.unwrap();
        assert!(!reopened.task.completed);
        assert!(reopened.award.is_none());

        let user = service.current_user().await.unwrap().unwrap();
        assert_eq!(user.xp, 75); // not retracted

        service.toggle_task(task.id).await.unwrap();
        let user = service.current_user().await.unwrap().unwrap();
        assert_eq!(user.xp, 150); // awarded a second time
        assert_eq!(user.tasks_completed, 2);
    }

    #[tokio::test]
    async fn test_toggle_unknown_task_errors() {
        let service = QuestService::new(MemoryStorage::new());
        service.bootstrap().await.unwrap();
        let missing = TaskId::new();
        assert!(matches!(
            service.toggle_task(missing).await,
            Err(EngineError::TaskNotFound(id)) if id == missing
        ));
    }

    #[tokio::test]
    async fn test_log_exercise_updates_user() {
        let service = QuestService::new(MemoryStorage::new());
        service.bootstrap().await.unwrap();
        let exercise = questlog_progression::find_exercise("Meditation").unwrap();

        // 30 minutes -> 1.5x performance at normal difficulty.
        let outcome = service
            .log_exercise(exercise, 30, Difficulty::Normal)
            .await
            .unwrap();
        assert_eq!(outcome.award.xp, 30);
        assert_eq!(outcome.user.reality_stats.discipline, 5); // round(3 * 1.5)
        assert_eq!(outcome.user.reality_stats.mental_resilience, 3);
        assert_eq!(outcome.user.tasks_completed, 0);

        let user = service.current_user().await.unwrap().unwrap();
        assert_eq!(user.xp, 30);
    }

    #[tokio::test]
    async fn test_notification_queue_caps_at_five() {
        let service = QuestService::new(MemoryStorage::new());
        service.bootstrap().await.unwrap();

        for _ in 0..7 {
            service
                .create_task(spec(Priority::Low, Complexity::Simple, Category::Other))
                .await
                .unwrap();
        }

        let queue = service.notifications().await.unwrap();
        assert_eq!(queue.len(), MAX_PENDING_NOTIFICATIONS);
        assert!(queue.iter().all(|n| !n.read));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let service = QuestService::new(MemoryStorage::new());
        service.bootstrap().await.unwrap();
        let task = service
            .create_task(spec(Priority::Low, Complexity::Simple, Category::Other))
            .await
            .unwrap();

        assert!(service.delete_task(task.id).await.unwrap());
        assert!(!service.delete_task(task.id).await.unwrap());
        assert!(service.list_tasks().await.unwrap().is_empty());
    }
}
