//! User model - identity plus progression state.
//!
//! `User.xp` and `User.tasks_completed` are the canonical counters. The
//! `RealityStats` block repeats them (`xp`, `current_level`, `current_title`,
//! `completed_tasks`, `last_active_date`) for the persisted record shape;
//! those caches are only ever written by the engine's derived-field sync,
//! never independently.

use crate::id::UserId;
use crate::Time;
use serde::{Deserialize, Serialize};

/// A user of the tracker and their progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address
    pub email: String,

    /// Creation timestamp
    pub created_at: Time,

    /// Total experience points. Monotonically non-decreasing.
    pub xp: u64,

    /// Level derived from `xp`. Recomputed whenever `xp` changes.
    pub level: u32,

    /// Number of task completions credited to this user.
    pub tasks_completed: u64,

    /// Last time this user completed a task or logged an exercise.
    pub last_active: Time,

    /// The RPG stat block.
    pub reality_stats: RealityStats,
}

impl User {
    /// Create a fresh user with a default stat block.
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: Time) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            created_at: now,
            xp: 0,
            level: 1,
            tasks_completed: 0,
            last_active: now,
            reality_stats: RealityStats {
                last_active_date: Some(now),
                ..RealityStats::default()
            },
        }
    }
}

/// The eight progression counters plus cached display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealityStats {
    /// Strength counter
    pub strength: u32,
    /// Agility counter
    pub agility: u32,
    /// Discipline counter
    pub discipline: u32,
    /// Intelligence counter
    pub intelligence: u32,
    /// Focus points counter
    pub focus_points: u32,
    /// Mental resilience counter
    pub mental_resilience: u32,
    /// Physical endurance counter
    pub physical_endurance: u32,
    /// Creativity counter
    pub creativity: u32,

    /// Cache of `User.tasks_completed`
    pub completed_tasks: u64,
    /// Total tasks ever assigned (display only)
    pub total_tasks: u64,
    /// Cache of `User.level`
    pub current_level: u32,
    /// Cache of `User.xp`
    pub xp: u64,
    /// Consecutive-day activity streak
    pub streak: u32,
    /// Longest streak ever reached
    pub longest_streak: u32,
    /// Cache of `User.last_active`
    pub last_active_date: Option<Time>,

    /// Unlocked achievement names, append-only.
    pub achievements: Vec<String>,
    /// Titles ever held
    pub titles: Vec<String>,
    /// Current title, derived from level.
    pub current_title: String,

    /// Health lifestyle score (50-100)
    pub health_score: f64,
    /// Productivity lifestyle score (50-100)
    pub productivity_score: f64,
    /// Mindfulness lifestyle score (50-100)
    pub mindfulness_score: f64,
    /// Social lifestyle score (50-100)
    pub social_score: f64,
}

impl Default for RealityStats {
    fn default() -> Self {
        Self {
            strength: 0,
            agility: 0,
            discipline: 0,
            intelligence: 0,
            focus_points: 0,
            mental_resilience: 0,
            physical_endurance: 0,
            creativity: 0,
            completed_tasks: 0,
            total_tasks: 0,
            current_level: 1,
            xp: 0,
            streak: 0,
            longest_streak: 0,
            last_active_date: None,
            achievements: Vec::new(),
            titles: vec!["Reality Shifter".to_string()],
            current_title: "Reality Shifter".to_string(),
            health_score: 50.0,
            productivity_score: 50.0,
            mindfulness_score: 50.0,
            social_score: 50.0,
        }
    }
}

impl RealityStats {
    /// Add a boost vector to the counters.
    pub fn apply_boosts(&mut self, boosts: &crate::StatBoosts) {
        self.strength += boosts.strength;
        self.agility += boosts.agility;
        self.discipline += boosts.discipline;
        self.intelligence += boosts.intelligence;
        self.focus_points += boosts.focus_points;
        self.mental_resilience += boosts.mental_resilience;
        self.physical_endurance += boosts.physical_endurance;
        self.creativity += boosts.creativity;
    }

    /// Value of a single counter.
    pub fn counter(&self, stat: crate::Stat) -> u32 {
        match stat {
            crate::Stat::Strength => self.strength,
            crate::Stat::Agility => self.agility,
            crate::Stat::Discipline => self.discipline,
            crate::Stat::Intelligence => self.intelligence,
            crate::Stat::FocusPoints => self.focus_points,
            crate::Stat::MentalResilience => self.mental_resilience,
            crate::Stat::PhysicalEndurance => self.physical_endurance,
            crate::Stat::Creativity => self.creativity,
        }
    }
}
