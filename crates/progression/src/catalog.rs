//! The static exercise catalog.
//!
//! Eight groups of five exercises each, with per-exercise base reward
//! vectors. Logged performances run through the multipliers in
//! [`crate::exercise`].

use questlog_core::{Measurement, Stat, StatBoosts};

/// A catalog exercise definition.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseDef {
    /// Exercise name
    pub name: &'static str,

    /// How performance is measured
    pub measurement: Measurement,

    /// Base per-stat reward before multipliers
    pub base_reward: StatBoosts,
}

/// A themed group of exercises.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseGroup {
    /// Stable identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// The stat this group mainly trains
    pub primary_stat: Stat,

    /// Exercises in the group
    pub exercises: &'static [ExerciseDef],
}

/// All exercise groups.
pub static EXERCISE_GROUPS: &[ExerciseGroup] = &[
    ExerciseGroup {
        id: "chest_biceps",
        name: "Chest & Biceps",
        primary_stat: Stat::Strength,
        exercises: &[
            ExerciseDef {
                name: "Push-ups",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 2,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Bench Press",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 3,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Bicep Curls",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Chest Flyes",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 2,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Diamond Push-ups",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 3,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "shoulders_back",
        name: "Shoulders & Back",
        primary_stat: Stat::Strength,
        exercises: &[
            ExerciseDef {
                name: "Pull-ups",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 3,
                    physical_endurance: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Shoulder Press",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 2,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Rows",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 2,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Lateral Raises",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Deadlifts",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 4,
                    physical_endurance: 2,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "legs",
        name: "Leg Day",
        primary_stat: Stat::Strength,
        exercises: &[
            ExerciseDef {
                name: "Squats",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 3,
                    physical_endurance: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Lunges",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 2,
                    agility: 1,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Leg Press",
                measurement: Measurement::Weight,
                base_reward: StatBoosts {
                    strength: 3,
                    physical_endurance: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Calf Raises",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 1,
                    agility: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Bulgarian Split Squats",
                measurement: Measurement::Reps,
                base_reward: StatBoosts {
                    strength: 3,
                    agility: 2,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "cardio",
        name: "Cardio & Endurance",
        primary_stat: Stat::PhysicalEndurance,
        exercises: &[
            ExerciseDef {
                name: "Running",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    physical_endurance: 3,
                    agility: 2,
                    discipline: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Cycling",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    physical_endurance: 2,
                    agility: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Swimming",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    physical_endurance: 3,
                    strength: 1,
                    agility: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "HIIT Workout",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    physical_endurance: 4,
                    agility: 2,
                    discipline: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Jump Rope",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    physical_endurance: 2,
                    agility: 3,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "mindfulness",
        name: "Mindfulness & Mental",
        primary_stat: Stat::Discipline,
        exercises: &[
            ExerciseDef {
                name: "Meditation",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    discipline: 3,
                    mental_resilience: 2,
                    focus_points: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Yoga",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    discipline: 2,
                    physical_endurance: 1,
                    mental_resilience: 1,
                    agility: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Breathing Exercises",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    discipline: 2,
                    mental_resilience: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Cold Shower",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    discipline: 3,
                    mental_resilience: 3,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Journaling",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    discipline: 1,
                    intelligence: 1,
                    creativity: 1,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "learning",
        name: "Learning & Reading",
        primary_stat: Stat::Intelligence,
        exercises: &[
            ExerciseDef {
                name: "Reading Books",
                measurement: Measurement::Pages,
                base_reward: StatBoosts {
                    intelligence: 3,
                    focus_points: 2,
                    creativity: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Online Course",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    intelligence: 4,
                    focus_points: 2,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Language Learning",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    intelligence: 2,
                    focus_points: 1,
                    discipline: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Podcasts",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    intelligence: 2,
                    focus_points: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Research",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    intelligence: 3,
                    focus_points: 2,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "creative",
        name: "Creative & Arts",
        primary_stat: Stat::Creativity,
        exercises: &[
            ExerciseDef {
                name: "Drawing/Painting",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    creativity: 3,
                    focus_points: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Music Practice",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    creativity: 3,
                    focus_points: 2,
                    discipline: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Writing",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    creativity: 2,
                    intelligence: 1,
                    focus_points: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Photography",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    creativity: 2,
                    focus_points: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Crafting/DIY",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    creativity: 2,
                    focus_points: 1,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
    ExerciseGroup {
        id: "social",
        name: "Social & Communication",
        primary_stat: Stat::Agility,
        exercises: &[
            ExerciseDef {
                name: "Public Speaking",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    agility: 3,
                    mental_resilience: 2,
                    intelligence: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Social Events",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    agility: 2,
                    mental_resilience: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Team Sports",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    agility: 2,
                    physical_endurance: 2,
                    strength: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Networking",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    agility: 2,
                    intelligence: 1,
                    ..StatBoosts::EMPTY
                },
            },
            ExerciseDef {
                name: "Presentations",
                measurement: Measurement::Duration,
                base_reward: StatBoosts {
                    agility: 2,
                    intelligence: 2,
                    mental_resilience: 1,
                    ..StatBoosts::EMPTY
                },
            },
        ],
    },
];

/// Look up a group by its identifier.
pub fn find_group(id: &str) -> Option<&'static ExerciseGroup> {
    EXERCISE_GROUPS.iter().find(|group| group.id == id)
}

/// Look up an exercise by name, case-insensitively, across all groups.
pub fn find_exercise(name: &str) -> Option<&'static ExerciseDef> {
    EXERCISE_GROUPS
        .iter()
        .flat_map(|group| group.exercises.iter())
        .find(|exercise| exercise.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(EXERCISE_GROUPS.len(), 8);
        for group in EXERCISE_GROUPS {
            assert_eq!(group.exercises.len(), 5, "group {}", group.id);
            for exercise in group.exercises {
                assert!(!exercise.base_reward.is_empty(), "{}", exercise.name);
            }
        }
    }

    #[test]
    fn test_find_exercise_case_insensitive() {
        let exercise = find_exercise("deadlifts").expect("catalog entry");
        assert_eq!(exercise.name, "Deadlifts");
        assert_eq!(exercise.measurement, Measurement::Weight);
        assert_eq!(exercise.base_reward.strength, 4);

        assert!(find_exercise("Underwater Basket Weaving").is_none());
    }

    #[test]
    fn test_find_group() {
        let group = find_group("cardio").expect("catalog group");
        assert_eq!(group.primary_stat, Stat::PhysicalEndurance);
        assert!(find_group("esports").is_none());
    }

    #[test]
    fn test_exercise_names_are_unique() {
        let mut names: Vec<&str> = EXERCISE_GROUPS
            .iter()
            .flat_map(|g| g.exercises.iter().map(|e| e.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
