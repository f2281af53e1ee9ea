//! The eight progression counters and the boost vectors that feed them.

use serde::{Deserialize, Serialize};

/// One of the eight named progression counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    /// Physical power and determination
    Strength,
    /// Mental quickness and adaptability
    Agility,
    /// Self-control and consistency
    Discipline,
    /// Problem-solving and learning ability
    Intelligence,
    /// Concentration and attention span
    FocusPoints,
    /// Stress resistance and recovery
    MentalResilience,
    /// Stamina and energy levels
    PhysicalEndurance,
    /// Innovation and creative thinking
    Creativity,
}

impl Stat {
    /// All stats, in display order.
    pub const ALL: [Stat; 8] = [
        Stat::Strength,
        Stat::Agility,
        Stat::Discipline,
        Stat::Intelligence,
        Stat::FocusPoints,
        Stat::MentalResilience,
        Stat::PhysicalEndurance,
        Stat::Creativity,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Strength => "Strength",
            Stat::Agility => "Agility",
            Stat::Discipline => "Discipline",
            Stat::Intelligence => "Intelligence",
            Stat::FocusPoints => "Focus Points",
            Stat::MentalResilience => "Mental Resilience",
            Stat::PhysicalEndurance => "Physical Endurance",
            Stat::Creativity => "Creativity",
        }
    }

    /// Short description shown next to the counter.
    pub fn description(&self) -> &'static str {
        match self {
            Stat::Strength => "Physical power and determination",
            Stat::Agility => "Mental quickness and adaptability",
            Stat::Discipline => "Self-control and consistency",
            Stat::Intelligence => "Problem-solving and learning ability",
            Stat::FocusPoints => "Concentration and attention span",
            Stat::MentalResilience => "Stress resistance and recovery",
            Stat::PhysicalEndurance => "Stamina and energy levels",
            Stat::Creativity => "Innovation and creative thinking",
        }
    }
}

/// A dense vector of per-stat increments.
///
/// Reward calculators return one of these; the engine folds it into the
/// user's counters. Components are independent and zero means "no change".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatBoosts {
    /// Strength delta
    pub strength: u32,
    /// Agility delta
    pub agility: u32,
    /// Discipline delta
    pub discipline: u32,
    /// Intelligence delta
    pub intelligence: u32,
    /// Focus points delta
    pub focus_points: u32,
    /// Mental resilience delta
    pub mental_resilience: u32,
    /// Physical endurance delta
    pub physical_endurance: u32,
    /// Creativity delta
    pub creativity: u32,
}

impl StatBoosts {
    /// The all-zero vector. Usable in `static` tables where
    /// `Default::default()` is not.
    pub const EMPTY: StatBoosts = StatBoosts {
        strength: 0,
        agility: 0,
        discipline: 0,
        intelligence: 0,
        focus_points: 0,
        mental_resilience: 0,
        physical_endurance: 0,
        creativity: 0,
    };

    /// Value for a single stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Agility => self.agility,
            Stat::Discipline => self.discipline,
            Stat::Intelligence => self.intelligence,
            Stat::FocusPoints => self.focus_points,
            Stat::MentalResilience => self.mental_resilience,
            Stat::PhysicalEndurance => self.physical_endurance,
            Stat::Creativity => self.creativity,
        }
    }

    /// Scale every component by `multiplier`, rounding each to the nearest
    /// integer independently.
    pub fn scaled(&self, multiplier: f64) -> StatBoosts {
        let scale = |v: u32| (v as f64 * multiplier).round() as u32;
        StatBoosts {
            strength: scale(self.strength),
            agility: scale(self.agility),
            discipline: scale(self.discipline),
            intelligence: scale(self.intelligence),
            focus_points: scale(self.focus_points),
            mental_resilience: scale(self.mental_resilience),
            physical_endurance: scale(self.physical_endurance),
            creativity: scale(self.creativity),
        }
    }

    /// True if every component is zero.
    pub fn is_empty(&self) -> bool {
        Stat::ALL.iter().all(|s| self.get(*s) == 0)
    }

    /// The non-zero components, in display order.
    pub fn gains(&self) -> Vec<(Stat, u32)> {
        Stat::ALL
            .iter()
            .map(|s| (*s, self.get(*s)))
            .filter(|(_, v)| *v > 0)
            .collect()
    }
}
