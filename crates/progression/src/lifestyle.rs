//! Lifestyle scores - derived wellbeing indicators.

use chrono::Duration;
use questlog_core::{Category, RealityStats, Task, Time};

/// The four bounded (50-100) lifestyle scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifestyleScores {
    /// Physical wellbeing
    pub health: f64,
    /// Work output
    pub productivity: f64,
    /// Mental balance
    pub mindfulness: f64,
    /// Social engagement
    pub social: f64,
}

/// Compute lifestyle scores from the stat counters and recent completions.
///
/// Each score starts at a baseline of 50, gains a weighted count of
/// same-category tasks completed in the trailing 7-day window (boundary
/// inclusive), plus a quarter of the sum of two related counters, and is
/// capped at 100.
pub fn lifestyle_scores(stats: &RealityStats, tasks: &[Task], now: Time) -> LifestyleScores {
    let week_ago = now - Duration::days(7);
    let recent = |category: Category| -> f64 {
        tasks
            .iter()
            .filter(|task| {
                task.completed
                    && task.category == category
                    && task.completed_at.is_some_and(|at| at >= week_ago)
            })
            .count() as f64
    };

    let health_tasks = recent(Category::Health);
    let work_tasks = recent(Category::Work);
    let personal_tasks = recent(Category::Personal);

    LifestyleScores {
        health: (50.0
            + health_tasks * 10.0
            + (stats.strength + stats.physical_endurance) as f64 / 4.0)
            .min(100.0),
        productivity: (50.0
            + work_tasks * 8.0
            + (stats.discipline + stats.focus_points) as f64 / 4.0)
            .min(100.0),
        mindfulness: (50.0
            + personal_tasks * 6.0
            + (stats.mental_resilience + stats.discipline) as f64 / 4.0)
            .min(100.0),
        social: (50.0 + (stats.agility + stats.creativity) as f64 / 4.0).min(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use questlog_core::{Complexity, Priority, TaskId};

    fn task(category: Category, completed_at: Option<Time>) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            title: "t".to_string(),
            description: String::new(),
            priority: Priority::Low,
            complexity: Complexity::Simple,
            category,
            tags: vec![],
            due_date: None,
            completed: completed_at.is_some(),
            completed_at,
            created_at: now - Duration::days(30),
            updated_at: now,
            user_id: None,
            estimated_hours: 1.0,
        }
    }

    #[test]
    fn test_baseline_is_50() {
        let scores = lifestyle_scores(&RealityStats::default(), &[], Utc::now());
        assert_eq!(scores.health, 50.0);
        assert_eq!(scores.productivity, 50.0);
        assert_eq!(scores.mindfulness, 50.0);
        assert_eq!(scores.social, 50.0);
    }

    #[test]
    fn test_recent_completions_weighted_by_category() {
        let now = Utc::now();
        let tasks = vec![
            task(Category::Health, Some(now - Duration::days(1))),
            task(Category::Work, Some(now - Duration::days(2))),
            task(Category::Work, Some(now - Duration::days(3))),
            task(Category::Personal, Some(now - Duration::days(1))),
        ];
        let scores = lifestyle_scores(&RealityStats::default(), &tasks, now);
        assert_eq!(scores.health, 60.0); // +10 per health task
        assert_eq!(scores.productivity, 66.0); // +8 per work task
        assert_eq!(scores.mindfulness, 56.0); // +6 per personal task
        assert_eq!(scores.social, 50.0);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let now = Utc::now();
        let on_boundary = task(Category::Health, Some(now - Duration::days(7)));
        let just_outside =
            task(Category::Health, Some(now - Duration::days(7) - Duration::seconds(1)));

        let scores = lifestyle_scores(&RealityStats::default(), &[on_boundary], now);
        assert_eq!(scores.health, 60.0);

        let scores = lifestyle_scores(&RealityStats::default(), &[just_outside], now);
        assert_eq!(scores.health, 50.0);
    }

    #[test]
    fn test_stat_counters_contribute_a_quarter() {
        let stats = RealityStats {
            strength: 10,
            physical_endurance: 6,
            agility: 4,
            creativity: 4,
            ..RealityStats::default()
        };
        let scores = lifestyle_scores(&stats, &[], Utc::now());
        assert_eq!(scores.health, 54.0); // 50 + 16/4
        assert_eq!(scores.social, 52.0); // 50 + 8/4
    }

    #[test]
    fn test_scores_cap_at_100() {
        let now = Utc::now();
        let tasks: Vec<Task> = (0..20)
            .map(|_| task(Category::Health, Some(now - Duration::days(1))))
            .collect();
        let stats = RealityStats {
            strength: 1000,
            physical_endurance: 1000,
            ..RealityStats::default()
        };
        let scores = lifestyle_scores(&stats, &tasks, now);
        assert_eq!(scores.health, 100.0);
        assert!(scores.productivity <= 100.0 && scores.productivity >= 50.0);
    }

    #[test]
    fn test_incomplete_tasks_do_not_count() {
        let now = Utc::now();
        let tasks = vec![task(Category::Health, None)];
        let scores = lifestyle_scores(&RealityStats::default(), &tasks, now);
        assert_eq!(scores.health, 50.0);
    }
}
