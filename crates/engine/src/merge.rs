//! State merge on task completion and exercise logging.
//!
//! These functions mutate in-memory state only; persistence happens after
//! the state settles. `User.xp` and `User.tasks_completed` are the
//! canonical counters - every mutation path ends in [`sync_derived`] so the
//! cached display fields on the stat block can never drift.

use questlog_core::{Difficulty, StatBoosts, Task, Time, User};
use questlog_progression::{
    calculate_level, earned_achievements, exercise_stat_rewards, exercise_xp_reward,
    level_rewards, lifestyle_scores, performance_multiplier, task_stat_boosts, task_xp_reward,
    title_for_level, ExerciseDef, LevelRewards,
};

/// A level-up event produced by a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before the award
    pub old_level: u32,
    /// Level after the award
    pub new_level: u32,
    /// Rewards for the new level
    pub rewards: LevelRewards,
}

/// What a task completion awarded.
#[derive(Debug, Clone)]
pub struct CompletionAward {
    /// XP added to the user
    pub xp: u64,
    /// Stat deltas added to the counters
    pub boosts: StatBoosts,
    /// Present when the award crossed a level boundary
    pub level_up: Option<LevelUp>,
}

/// What an exercise log awarded.
#[derive(Debug, Clone)]
pub struct ExerciseAward {
    /// XP added to the user
    pub xp: u64,
    /// Stat deltas added to the counters
    pub boosts: StatBoosts,
    /// Present when the award crossed a level boundary
    pub level_up: Option<LevelUp>,
}

/// Flip a task to completed. Returns false (and changes nothing) if it
/// already was; `completed_at` is stamped exactly once per transition.
pub fn mark_completed(task: &mut Task, now: Time) -> bool {
    if task.completed {
        return false;
    }
    task.completed = true;
    task.completed_at = Some(now);
    task.updated_at = now;
    true
}

/// Flip a task back to incomplete. Only the completion flags are reversed;
/// XP and stats already awarded stay (completing again awards again - the
/// anti-grind stance is to never retract, not to dedupe).
pub fn mark_reopened(task: &mut Task, now: Time) -> bool {
    if !task.completed {
        return false;
    }
    task.completed = false;
    task.completed_at = None;
    task.updated_at = now;
    true
}

/// Award a completed task to the user: XP, stat boosts, counters, caches,
/// achievements and lifestyle scores. `tasks` is the user's full task list
/// with the completion already applied.
pub fn apply_task_completion(
    user: &mut User,
    task: &Task,
    tasks: &[Task],
    now: Time,
) -> CompletionAward {
    let xp = task_xp_reward(task.priority, task.complexity);
    let boosts = task_stat_boosts(task.category, task.priority, task.complexity);

    let old_level = calculate_level(user.xp);
    user.xp += xp;
    let new_level = calculate_level(user.xp);

    user.reality_stats.apply_boosts(&boosts);
    user.tasks_completed += 1;

    sync_derived(user, now);
    refresh_achievements(user, tasks);
    refresh_lifestyle(user, tasks, now);

    let level_up = (new_level > old_level).then(|| LevelUp {
        old_level,
        new_level,
        rewards: level_rewards(old_level, new_level),
    });

    CompletionAward {
        xp,
        boosts,
        level_up,
    }
}

/// Award a logged exercise to the user.
pub fn apply_exercise(
    user: &mut User,
    exercise: &ExerciseDef,
    value: u32,
    difficulty: Difficulty,
    tasks: &[Task],
    now: Time,
) -> ExerciseAward {
    let performance = performance_multiplier(exercise.measurement, value);
    let boosts = exercise_stat_rewards(&exercise.base_reward, performance, difficulty);
    let xp = exercise_xp_reward(performance, difficulty);

    let old_level = calculate_level(user.xp);
    user.xp += xp;
    let new_level = calculate_level(user.xp);

    user.reality_stats.apply_boosts(&boosts);

    sync_derived(user, now);
    refresh_achievements(user, tasks);
    refresh_lifestyle(user, tasks, now);

    let level_up = (new_level > old_level).then(|| LevelUp {
        old_level,
        new_level,
        rewards: level_rewards(old_level, new_level),
    });

    ExerciseAward {
        xp,
        boosts,
        level_up,
    }
}

/// Recompute every cached display field from the canonical counters.
///
/// The caches (`reality_stats.{xp, current_level, current_title,
/// completed_tasks, last_active_date}`) are only ever written here.
pub fn sync_derived(user: &mut User, now: Time) {
    user.level = calculate_level(user.xp);
    user.last_active = now;

    let stats = &mut user.reality_stats;
    stats.xp = user.xp;
    stats.current_level = user.level;
    stats.current_title = title_for_level(user.level).to_string();
    stats.completed_tasks = user.tasks_completed;
    stats.last_active_date = Some(now);
}

/// Union the currently earned achievements into the user's append-only
/// list. Re-running with unchanged inputs never duplicates or drops
/// entries.
pub fn refresh_achievements(user: &mut User, tasks: &[Task]) {
    let earned = earned_achievements(&user.reality_stats, tasks);
    for name in earned {
        if !user.reality_stats.achievements.contains(&name) {
            user.reality_stats.achievements.push(name);
        }
    }
}

/// Recompute the stored lifestyle scores.
pub fn refresh_lifestyle(user: &mut User, tasks: &[Task], now: Time) {
    let scores = lifestyle_scores(&user.reality_stats, tasks, now);
    let stats = &mut user.reality_stats;
    stats.health_score = scores.health;
    stats.productivity_score = scores.productivity;
    stats.mindfulness_score = scores.mindfulness;
    stats.social_score = scores.social;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use questlog_core::{Category, Complexity, Priority, TaskId};

    fn task(priority: Priority, complexity: Complexity, category: Category) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            title: "quest".to_string(),
            description: String::new(),
            priority,
            complexity,
            category,
            tags: vec![],
            due_date: None,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
            user_id: None,
            estimated_hours: 1.0,
        }
    }

    #[test]
    fn test_completion_awards_exact_reward() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        let mut quest = task(Priority::High, Complexity::Epic, Category::Fitness);

        assert!(mark_completed(&mut quest, now));
        let tasks = vec![quest.clone()];
        let award = apply_task_completion(&mut user, &quest, &tasks, now);

        assert_eq!(award.xp, 300);
        assert_eq!(user.xp, 300);
        assert_eq!(user.tasks_completed, 1);
        assert_eq!(user.reality_stats.strength, 9);
        assert_eq!(user.reality_stats.physical_endurance, 6);
        assert_eq!(user.reality_stats.agility, 6);
    }

    #[test]
    fn test_caches_stay_in_lockstep() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        let mut quest = task(Priority::High, Complexity::Epic, Category::Work);

        mark_completed(&mut quest, now);
        let tasks = vec![quest.clone()];
        apply_task_completion(&mut user, &quest, &tasks, now);

        let stats = &user.reality_stats;
        assert_eq!(stats.xp, user.xp);
        assert_eq!(stats.current_level, user.level);
        assert_eq!(stats.completed_tasks, user.tasks_completed);
        assert_eq!(stats.current_title, "Reality Shifter"); // 300 XP -> level 3
        assert_eq!(stats.last_active_date, Some(now));
        assert_eq!(user.level, 3);
    }

    #[test]
    fn test_level_up_event_carries_rewards() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        let mut quest = task(Priority::High, Complexity::Normal, Category::Work);

        mark_completed(&mut quest, now);
        let tasks = vec![quest.clone()];
        // 150 XP: level 1 -> 2.
        let award = apply_task_completion(&mut user, &quest, &tasks, now);

        let level_up = award.level_up.expect("crossed a level boundary");
        assert_eq!(level_up.old_level, 1);
        assert_eq!(level_up.new_level, 2);
        assert_eq!(level_up.rewards.stat_points, 0);
        assert!(level_up.rewards.milestones.is_empty());
    }

    #[test]
    fn test_no_level_up_event_within_a_level() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        let mut quest = task(Priority::Low, Complexity::Simple, Category::Personal);

        mark_completed(&mut quest, now);
        let tasks = vec![quest.clone()];
        // 25 XP stays inside level 1.
        let award = apply_task_completion(&mut user, &quest, &tasks, now);
        assert!(award.level_up.is_none());
        assert_eq!(user.level, 1);
    }

    #[test]
    fn test_reopen_does_not_retract_and_recompletion_doubles() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        let mut quest = task(Priority::Medium, Complexity::Complex, Category::Learning);

        mark_completed(&mut quest, now);
        let tasks = vec![quest.clone()];
        apply_task_completion(&mut user, &quest, &tasks, now);
        assert_eq!(user.xp, 100);
        assert_eq!(user.reality_stats.intelligence, 5); // 3 * 1.8 = 5.4 -> 5

        // Unchecking reverses only the flags.
        assert!(mark_reopened(&mut quest, now));
        assert!(!quest.completed);
        assert_eq!(quest.completed_at, None);
        assert_eq!(user.xp, 100);
        assert_eq!(user.reality_stats.intelligence, 5);

        // Completing again awards again. This doubling is the documented
        // policy, not a bug.
        mark_completed(&mut quest, now);
        let tasks = vec![quest.clone()];
        apply_task_completion(&mut user, &quest, &tasks, now);
        assert_eq!(user.xp, 200);
        assert_eq!(user.tasks_completed, 2);
        assert_eq!(user.reality_stats.intelligence, 10);
    }

    #[test]
    fn test_mark_completed_is_transition_only() {
        let now = Utc::now();
        let mut quest = task(Priority::Low, Complexity::Simple, Category::Other);
        assert!(mark_completed(&mut quest, now));
        let stamped = quest.completed_at;
        assert!(stamped.is_some());

        // Completing an already-completed task is a no-op.
        assert!(!mark_completed(&mut quest, now));
        assert_eq!(quest.completed_at, stamped);

        // Reopening an incomplete task is too.
        assert!(mark_reopened(&mut quest, now));
        assert!(!mark_reopened(&mut quest, now));
        assert_eq!(quest.completed_at, None);
    }

    #[test]
    fn test_exercise_award_and_floor() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        let exercise = questlog_progression::find_exercise("Running").unwrap();

        // 60 minutes -> 2.0x performance, hard -> 1.3x.
        let award = apply_exercise(&mut user, exercise, 60, Difficulty::Hard, &[], now);
        assert_eq!(award.xp, 52); // round(20 * 2.0 * 1.3)
        assert_eq!(user.xp, 52);
        assert_eq!(user.reality_stats.physical_endurance, 8); // round(3 * 2.6)
        assert_eq!(user.reality_stats.agility, 5); // round(2 * 2.6)
        assert_eq!(user.reality_stats.discipline, 3); // round(1 * 2.6)
        assert_eq!(user.tasks_completed, 0); // exercises are not tasks
    }

    #[test]
    fn test_achievement_union_is_append_only() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        user.reality_stats.current_level = 10;
        user.reality_stats
            .achievements
            .push("First Milestone".to_string());

        refresh_achievements(&mut user, &[]);
        refresh_achievements(&mut user, &[]);
        assert_eq!(user.reality_stats.achievements, vec!["First Milestone"]);
    }

    #[test]
    fn test_lifestyle_refresh_tracks_counters() {
        let now = Utc::now();
        let mut user = User::new("Hunter", "h@example.com", now);
        user.reality_stats.strength = 8;
        user.reality_stats.physical_endurance = 8;

        refresh_lifestyle(&mut user, &[], now);
        assert_eq!(user.reality_stats.health_score, 54.0);
        assert_eq!(user.reality_stats.social_score, 50.0);
    }
}
