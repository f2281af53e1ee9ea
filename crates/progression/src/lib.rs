//! QuestLog progression rules.
//!
//! Pure, synchronous functions: level curves, task and exercise rewards,
//! titles, achievements, and lifestyle scores. Nothing in this crate does
//! I/O or mutates state; the engine crate folds these results into the user
//! record.

#![warn(missing_docs)]

mod level;
mod reward;
mod exercise;
mod title;
mod achievement;
mod lifestyle;
mod catalog;

pub use level::{calculate_level, level_progress, xp_to_next_level, XpProgress, BASE_XP, XP_MULTIPLIER};
pub use reward::{level_rewards, task_stat_boosts, task_xp_reward, LevelRewards};
pub use exercise::{
    exercise_stat_rewards, exercise_xp_reward, performance_multiplier, EXERCISE_BASE_XP,
    EXERCISE_MIN_XP,
};
pub use title::title_for_level;
pub use achievement::{earned_achievements, Achievement, ACHIEVEMENTS};
pub use lifestyle::{lifestyle_scores, LifestyleScores};
pub use catalog::{find_exercise, find_group, ExerciseDef, ExerciseGroup, EXERCISE_GROUPS};
