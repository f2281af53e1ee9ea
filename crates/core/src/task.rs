//! Task model - the unit of work ("quest").

use crate::id::{TaskId, UserId};
use crate::Time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task to be completed for XP and stat rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Threat level; drives the base XP reward.
    pub priority: Priority,

    /// Quest rank; scales the XP reward.
    pub complexity: Complexity,

    /// Category; selects the stat boost vector.
    pub category: Category,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Optional deadline
    pub due_date: Option<NaiveDate>,

    /// Whether the task has been completed.
    pub completed: bool,

    /// Set exactly once on the incomplete -> complete transition,
    /// cleared again on complete -> incomplete.
    pub completed_at: Option<Time>,

    /// Creation timestamp
    pub created_at: Time,

    /// Last update timestamp
    pub updated_at: Time,

    /// Owning user, if any
    pub user_id: Option<UserId>,

    /// Rough effort estimate
    pub estimated_hours: f32,
}

/// Task priority ("threat level").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low threat
    Low,
    /// Medium threat
    Medium,
    /// High threat
    High,
}

/// Task complexity ("quest rank").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Quick one-step task
    Simple,
    /// Typical task
    Normal,
    /// Multi-step task
    Complex,
    /// Large undertaking
    Epic,
}

/// Task category.
///
/// Categories drive the stat boost table. The persisted form is a plain
/// string; anything outside the known set deserializes to
/// [`Category::Other`], which takes the default boost. Conversion is total
/// in both directions, so category lookups can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Professional work
    Work,
    /// Personal errands
    Personal,
    /// Health upkeep
    Health,
    /// Study and courses
    Learning,
    /// Creative projects
    Creative,
    /// Physical training
    Fitness,
    /// Meditation and reflection
    Mindfulness,
    /// Social activities
    Social,
    /// Anything else ("general" and unknown strings land here)
    Other,
}

impl Category {
    /// Lowercase label as persisted.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Learning => "learning",
            Category::Creative => "creative",
            Category::Fitness => "fitness",
            Category::Mindfulness => "mindfulness",
            Category::Social => "social",
            Category::Other => "other",
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "work" => Category::Work,
            "personal" => Category::Personal,
            "health" => Category::Health,
            "learning" => Category::Learning,
            "creative" => Category::Creative,
            "fitness" => Category::Fitness,
            "mindfulness" => Category::Mindfulness,
            "social" => Category::Social,
            _ => Category::Other,
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> String {
        category.label().to_string()
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s.to_string()))
    }
}
