//! Title assignment - the prestige ladder.

/// Title for a level. Thresholds are checked from the top down; the
/// highest one met wins. Below level 5 everyone is a "Reality Shifter".
pub fn title_for_level(level: u32) -> &'static str {
    if level >= 100 {
        "Infinity Walker"
    } else if level >= 90 {
        "Reality Sovereign"
    } else if level >= 80 {
        "Dimension Ruler"
    } else if level >= 70 {
        "Universe Shaper"
    } else if level >= 60 {
        "Cosmic Guardian"
    } else if level >= 50 {
        "Shadow Monarch"
    } else if level >= 40 {
        "Elite Hunter"
    } else if level >= 30 {
        "Master Warrior"
    } else if level >= 20 {
        "Skilled Fighter"
    } else if level >= 15 {
        "Experienced Soldier"
    } else if level >= 10 {
        "Battle Tested"
    } else if level >= 5 {
        "Novice Hunter"
    } else {
        "Reality Shifter"
    }
}
