//! QuestLog event handlers.
//!
//! Folds progression rule output into user state: task completion and
//! exercise logging, level-up events, achievement unions, and the
//! notification queue. The merge functions are pure over in-memory state;
//! `QuestService` wires them to a storage backend.

#![warn(missing_docs)]

mod merge;
mod service;

pub use merge::{
    apply_exercise, apply_task_completion, mark_completed, mark_reopened, refresh_achievements,
    refresh_lifestyle, sync_derived, CompletionAward, ExerciseAward, LevelUp,
};
pub use service::{EngineError, ExerciseOutcome, QuestService, Result, TaskSpec, ToggleOutcome};
