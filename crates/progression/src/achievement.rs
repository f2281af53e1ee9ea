//! Achievement evaluation.
//!
//! Achievements are re-derived from current counters on every evaluation;
//! there is no incremental unlock state here. The engine unions the result
//! into the user's append-only list.

use questlog_core::{RealityStats, Task};

/// Currently satisfied achievement names, from the cached level and the
/// completed-task count.
///
/// Stateless and idempotent: the same inputs always yield the same set.
pub fn earned_achievements(stats: &RealityStats, tasks: &[Task]) -> Vec<String> {
    let mut unlocked = Vec::new();

    if stats.current_level >= 10 {
        unlocked.push("First Milestone".to_string());
    }
    if stats.current_level >= 25 {
        unlocked.push("Quarter Century".to_string());
    }
    if stats.current_level >= 50 {
        unlocked.push("Halfway to Greatness".to_string());
    }
    if stats.current_level >= 100 {
        unlocked.push("Centennial Master".to_string());
    }

    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    if completed_tasks >= 10 {
        unlocked.push("Task Master".to_string());
    }
    if completed_tasks >= 50 {
        unlocked.push("Productivity Guru".to_string());
    }
    if completed_tasks >= 100 {
        unlocked.push("Quest Legend".to_string());
    }

    unlocked
}

/// A display catalog entry: name, description, and unlock predicate over
/// the stat block.
pub struct Achievement {
    /// Achievement name
    pub name: &'static str,

    /// What it takes to unlock
    pub description: &'static str,

    unlock: fn(&RealityStats) -> bool,
}

impl Achievement {
    /// Whether this achievement is unlocked for the given stats.
    pub fn unlocked(&self, stats: &RealityStats) -> bool {
        (self.unlock)(stats)
    }
}

impl std::fmt::Debug for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Achievement")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// The display catalog. Thresholds stay consistent with
/// [`earned_achievements`].
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        name: "First Steps",
        description: "Complete your first task",
        unlock: |stats| stats.completed_tasks >= 1,
    },
    Achievement {
        name: "Task Master",
        description: "Complete 10 tasks",
        unlock: |stats| stats.completed_tasks >= 10,
    },
    Achievement {
        name: "Productivity Guru",
        description: "Complete 50 tasks",
        unlock: |stats| stats.completed_tasks >= 50,
    },
    Achievement {
        name: "Quest Legend",
        description: "Complete 100 tasks",
        unlock: |stats| stats.completed_tasks >= 100,
    },
    Achievement {
        name: "Level Up",
        description: "Reach level 5",
        unlock: |stats| stats.current_level >= 5,
    },
    Achievement {
        name: "Rising Star",
        description: "Reach level 10",
        unlock: |stats| stats.current_level >= 10,
    },
    Achievement {
        name: "Elite Hunter",
        description: "Reach level 25",
        unlock: |stats| stats.current_level >= 25,
    },
    Achievement {
        name: "Shadow Monarch",
        description: "Reach level 50",
        unlock: |stats| stats.current_level >= 50,
    },
    Achievement {
        name: "Infinity Walker",
        description: "Reach level 100",
        unlock: |stats| stats.current_level >= 100,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use questlog_core::{Category, Complexity, Priority, Task, TaskId};

    fn completed_task() -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            title: "done".to_string(),
            description: String::new(),
            priority: Priority::Low,
            complexity: Complexity::Simple,
            category: Category::Other,
            tags: vec![],
            due_date: None,
            completed: true,
            completed_at: Some(now),
            created_at: now,
            updated_at: now,
            user_id: None,
            estimated_hours: 1.0,
        }
    }

    #[test]
    fn test_level_thresholds() {
        let mut stats = RealityStats::default();
        assert!(earned_achievements(&stats, &[]).is_empty());

        stats.current_level = 10;
        assert_eq!(earned_achievements(&stats, &[]), vec!["First Milestone"]);

        stats.current_level = 100;
        assert_eq!(
            earned_achievements(&stats, &[]),
            vec![
                "First Milestone",
                "Quarter Century",
                "Halfway to Greatness",
                "Centennial Master"
            ]
        );
    }

    #[test]
    fn test_task_thresholds_count_only_completed() {
        let stats = RealityStats::default();
        let mut tasks: Vec<Task> = (0..10).map(|_| completed_task()).collect();
        tasks.push(Task {
            completed: false,
            completed_at: None,
            ..completed_task()
        });

        assert_eq!(earned_achievements(&stats, &tasks), vec!["Task Master"]);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut stats = RealityStats::default();
        stats.current_level = 25;
        let tasks: Vec<Task> = (0..50).map(|_| completed_task()).collect();

        let first = earned_achievements(&stats, &tasks);
        let second = earned_achievements(&stats, &tasks);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                "First Milestone",
                "Quarter Century",
                "Task Master",
                "Productivity Guru"
            ]
        );
    }

    #[test]
    fn test_catalog_agrees_with_evaluator() {
        let mut stats = RealityStats::default();
        stats.current_level = 50;
        stats.completed_tasks = 50;

        let unlocked: Vec<&str> = ACHIEVEMENTS
            .iter()
            .filter(|a| a.unlocked(&stats))
            .map(|a| a.name)
            .collect();
        assert_eq!(
            unlocked,
            vec![
                "First Steps",
                "Task Master",
                "Productivity Guru",
                "Level Up",
                "Rising Star",
                "Elite Hunter",
                "Shadow Monarch"
            ]
        );
    }
}
