//! Percentile skill checks.
//!
//! Roll-under d100 with three success tiers: Regular (the chance), Hard
//! (half) and Extreme (fifth). Stored skill totals may exceed 100; they are
//! capped here, at the point of use.

use serde::{Deserialize, Serialize};

/// Highest meaningful percentile chance.
pub const MAX_CHANCE: u32 = 100;

/// Success levels for a percentile check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessLevel {
    /// Roll of 01, always succeeds
    Critical,
    /// Roll <= chance / 5
    Extreme,
    /// Roll <= chance / 2
    Hard,
    /// Roll <= chance
    Regular,
    /// Roll > chance but not a fumble
    Failure,
    /// 96-100 if chance < 50, or 100 if chance >= 50
    Fumble,
}

impl SuccessLevel {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SuccessLevel::Critical
                | SuccessLevel::Extreme
                | SuccessLevel::Hard
                | SuccessLevel::Regular
        )
    }
}

/// Cap a stored total into the percentile range.
pub fn percentile_chance(total: u32) -> u32 {
    total.min(MAX_CHANCE)
}

/// Hard success threshold.
pub fn half_value(chance: u32) -> u32 {
    percentile_chance(chance) / 2
}

/// Extreme success threshold.
pub fn fifth_value(chance: u32) -> u32 {
    percentile_chance(chance) / 5
}

/// Determine the success level of a d100 roll against a chance.
pub fn check_success(roll: u32, chance: u32) -> SuccessLevel {
    let chance = percentile_chance(chance);

    if roll == 1 {
        return SuccessLevel::Critical;
    }
    if is_fumble(roll, chance) {
        return SuccessLevel::Fumble;
    }

    if roll <= fifth_value(chance) {
        SuccessLevel::Extreme
    } else if roll <= half_value(chance) {
        SuccessLevel::Hard
    } else if roll <= chance {
        SuccessLevel::Regular
    } else {
        SuccessLevel::Failure
    }
}

pub fn is_fumble(roll: u32, chance: u32) -> bool {
    if percentile_chance(chance) < 50 {
        roll >= 96
    } else {
        roll >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_tiers() {
        assert_eq!(check_success(1, 10), SuccessLevel::Critical);
        assert_eq!(check_success(12, 60), SuccessLevel::Extreme);
        assert_eq!(check_success(13, 60), SuccessLevel::Hard);
        assert_eq!(check_success(30, 60), SuccessLevel::Hard);
        assert_eq!(check_success(31, 60), SuccessLevel::Regular);
        assert_eq!(check_success(60, 60), SuccessLevel::Regular);
        assert_eq!(check_success(61, 60), SuccessLevel::Failure);
    }

    #[test]
    fn fumble_range_depends_on_chance() {
        assert_eq!(check_success(96, 40), SuccessLevel::Fumble);
        assert_eq!(check_success(96, 60), SuccessLevel::Failure);
        assert_eq!(check_success(100, 60), SuccessLevel::Fumble);
    }

    #[test]
    fn chance_above_hundred_is_capped_at_use() {
        assert_eq!(percentile_chance(135), 100);
        assert_eq!(half_value(135), 50);
        assert_eq!(fifth_value(135), 20);
        assert_eq!(check_success(100, 135), SuccessLevel::Fumble);
        assert_eq!(check_success(99, 135), SuccessLevel::Regular);
    }

    #[test]
    fn success_predicate() {
        assert!(SuccessLevel::Hard.is_success());
        assert!(!SuccessLevel::Fumble.is_success());
        assert!(!SuccessLevel::Failure.is_success());
    }
}
