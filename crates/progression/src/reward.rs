//! Task rewards: XP, stat boosts, and level-up rewards.

use questlog_core::{Category, Complexity, Priority, StatBoosts};

use crate::title::title_for_level;

/// XP earned for completing a task:
/// `round(base_priority_xp * complexity_multiplier)`.
pub fn task_xp_reward(priority: Priority, complexity: Complexity) -> u64 {
    let base_xp: u64 = match priority {
        Priority::Low => 25,
        Priority::Medium => 50,
        Priority::High => 100,
    };

    let multiplier: f64 = match complexity {
        Complexity::Simple => 1.0,
        Complexity::Normal => 1.5,
        Complexity::Complex => 2.0,
        Complexity::Epic => 3.0,
    };

    (base_xp as f64 * multiplier).round() as u64
}

// Base boost vector per category. Unknown categories take the default
// discipline/intelligence pair via the Other arm.
fn base_stat_boosts(category: Category) -> StatBoosts {
    match category {
        Category::Work => StatBoosts {
            intelligence: 2,
            discipline: 1,
            focus_points: 1,
            ..StatBoosts::EMPTY
        },
        Category::Personal => StatBoosts {
            discipline: 2,
            mental_resilience: 1,
            ..StatBoosts::EMPTY
        },
        Category::Health => StatBoosts {
            strength: 2,
            physical_endurance: 2,
            agility: 1,
            ..StatBoosts::EMPTY
        },
        Category::Learning => StatBoosts {
            intelligence: 3,
            creativity: 1,
            focus_points: 1,
            ..StatBoosts::EMPTY
        },
        Category::Creative => StatBoosts {
            creativity: 3,
            intelligence: 1,
            ..StatBoosts::EMPTY
        },
        Category::Fitness => StatBoosts {
            strength: 3,
            physical_endurance: 2,
            agility: 2,
            ..StatBoosts::EMPTY
        },
        Category::Mindfulness => StatBoosts {
            discipline: 2,
            mental_resilience: 2,
            focus_points: 1,
            ..StatBoosts::EMPTY
        },
        Category::Social => StatBoosts {
            agility: 1,
            mental_resilience: 1,
            ..StatBoosts::EMPTY
        },
        Category::Other => StatBoosts {
            discipline: 1,
            intelligence: 1,
            ..StatBoosts::EMPTY
        },
    }
}

/// Stat boosts for completing a task: the category's base vector, every
/// component scaled by the priority and complexity multipliers and rounded
/// independently.
pub fn task_stat_boosts(
    category: Category,
    priority: Priority,
    complexity: Complexity,
) -> StatBoosts {
    let priority_multiplier: f64 = match priority {
        Priority::Low => 1.0,
        Priority::Medium => 1.2,
        Priority::High => 1.5,
    };

    let complexity_multiplier: f64 = match complexity {
        Complexity::Simple => 1.0,
        Complexity::Normal => 1.2,
        Complexity::Complex => 1.5,
        Complexity::Epic => 2.0,
    };

    base_stat_boosts(category).scaled(priority_multiplier * complexity_multiplier)
}

/// Rewards granted when a level-up lands on `new_level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRewards {
    /// Freely assignable stat points
    pub stat_points: u32,

    /// Title at the new level
    pub title: &'static str,

    /// One "Level N Master" label per multiple of 10 crossed
    pub milestones: Vec<String>,
}

/// Compute the rewards for rising from `old_level` to `new_level`.
///
/// A single completion can cross several levels; every multiple of 10 in
/// `(old_level, new_level]` earns its own milestone label.
pub fn level_rewards(old_level: u32, new_level: u32) -> LevelRewards {
    let mut milestones = Vec::new();
    let mut milestone = (old_level / 10 + 1) * 10;
    while milestone <= new_level {
        milestones.push(format!("Level {} Master", milestone));
        milestone += 10;
    }

    LevelRewards {
        stat_points: new_level / 5,
        title: title_for_level(new_level),
        milestones,
    }
}
