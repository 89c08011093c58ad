//! Derived stats value object.
//!
//! Owned by the character aggregate and recomputed whenever characteristics
//! change. Maximums always come from the characteristics; current values are
//! user-adjustable and clamped.

use serde::{Deserialize, Serialize};

use crate::rules::derived::{
    damage_bonus_and_build, hit_points, magic_points, movement_rate_for, starting_sanity,
    SANITY_CEILING, STARTING_LUCK_TOKENS,
};
use crate::value_objects::Characteristics;

/// A derived stat with a user-adjustable current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedStatField {
    HitPoints,
    MagicPoints,
    Sanity,
    LuckTokens,
}

impl DerivedStatField {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HitPoints => "Hit Points",
            Self::MagicPoints => "Magic Points",
            Self::Sanity => "Sanity",
            Self::LuckTokens => "Luck Tokens",
        }
    }
}

/// Everything the rules derive from characteristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub max_hit_points: u32,
    pub current_hit_points: u32,
    pub max_magic_points: u32,
    pub current_magic_points: u32,
    pub max_sanity: u32,
    pub current_sanity: u32,
    pub luck_tokens: u32,
    pub max_luck_tokens: u32,
    pub movement_rate: u32,
    pub damage_bonus: String,
    pub build: i32,
}

impl DerivedStats {
    /// Fresh derived stats with every current value at its maximum.
    pub fn compute(chars: &Characteristics) -> Self {
        let max_hit_points = hit_points(chars.constitution, chars.size);
        let max_magic_points = magic_points(chars.power);
        let max_sanity = starting_sanity(chars.power);
        let (damage_bonus, build) = damage_bonus_and_build(chars.strength, chars.size);

        Self {
            max_hit_points,
            current_hit_points: max_hit_points,
            max_magic_points,
            current_magic_points: max_magic_points,
            max_sanity,
            current_sanity: max_sanity.min(SANITY_CEILING),
            luck_tokens: STARTING_LUCK_TOKENS,
            max_luck_tokens: STARTING_LUCK_TOKENS,
            movement_rate: movement_rate_for(chars),
            damage_bonus: damage_bonus.to_string(),
            build,
        }
    }

    /// Recompute after a characteristic edit.
    ///
    /// A current value sitting at its old maximum follows the new maximum; any
    /// other current value is kept and clamped down to the new maximum. The
    /// luck pool is carried over untouched.
    pub fn recompute(&self, chars: &Characteristics) -> Self {
        let fresh = Self::compute(chars);
        Self {
            current_hit_points: carry_over(
                self.current_hit_points,
                self.max_hit_points,
                fresh.max_hit_points,
            ),
            current_magic_points: carry_over(
                self.current_magic_points,
                self.max_magic_points,
                fresh.max_magic_points,
            ),
            current_sanity: carry_over(
                self.current_sanity,
                self.sanity_cap(),
                fresh.sanity_cap(),
            ),
            luck_tokens: self.luck_tokens,
            max_luck_tokens: self.max_luck_tokens,
            ..fresh
        }
    }

    pub fn current(&self, field: DerivedStatField) -> u32 {
        match field {
            DerivedStatField::HitPoints => self.current_hit_points,
            DerivedStatField::MagicPoints => self.current_magic_points,
            DerivedStatField::Sanity => self.current_sanity,
            DerivedStatField::LuckTokens => self.luck_tokens,
        }
    }

    /// Highest value the current field may hold.
    pub fn ceiling(&self, field: DerivedStatField) -> u32 {
        match field {
            DerivedStatField::HitPoints => self.max_hit_points,
            DerivedStatField::MagicPoints => self.max_magic_points,
            DerivedStatField::Sanity => self.sanity_cap(),
            DerivedStatField::LuckTokens => self.max_luck_tokens,
        }
    }

    /// Set a current value, clamped into `[0, ceiling]`. Returns the stored value.
    pub fn set_current(&mut self, field: DerivedStatField, value: i64) -> u32 {
        let clamped = value.clamp(0, i64::from(self.ceiling(field))) as u32;
        let slot = match field {
            DerivedStatField::HitPoints => &mut self.current_hit_points,
            DerivedStatField::MagicPoints => &mut self.current_magic_points,
            DerivedStatField::Sanity => &mut self.current_sanity,
            DerivedStatField::LuckTokens => &mut self.luck_tokens,
        };
        *slot = clamped;
        clamped
    }

    /// Shift a current value by `delta`, clamped. Returns the stored value.
    pub fn adjust_current(&mut self, field: DerivedStatField, delta: i64) -> u32 {
        let target = i64::from(self.current(field)).saturating_add(delta);
        self.set_current(field, target)
    }

    fn sanity_cap(&self) -> u32 {
        self.max_sanity.min(SANITY_CEILING)
    }
}

impl Default for DerivedStats {
    fn default() -> Self {
        Self::compute(&Characteristics::default())
    }
}

fn carry_over(current: u32, old_max: u32, new_max: u32) -> u32 {
    if current >= old_max {
        new_max
    } else {
        current.min(new_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Characteristic;

    fn chars(con: u32, siz: u32, pow: u32) -> Characteristics {
        Characteristics::default()
            .with(Characteristic::Con, con)
            .with(Characteristic::Siz, siz)
            .with(Characteristic::Pow, pow)
    }

    mod compute {
        use super::*;

        #[test]
        fn defaults_for_fifty_everywhere() {
            let stats = DerivedStats::compute(&Characteristics::default());
            assert_eq!(stats.max_hit_points, 10);
            assert_eq!(stats.current_hit_points, 10);
            assert_eq!(stats.max_magic_points, 10);
            assert_eq!(stats.max_sanity, 50);
            assert_eq!(stats.current_sanity, 50);
            assert_eq!(stats.luck_tokens, 5);
            assert_eq!(stats.max_luck_tokens, 5);
            assert_eq!(stats.movement_rate, 9);
            assert_eq!(stats.damage_bonus, "0");
            assert_eq!(stats.build, 0);
        }

        #[test]
        fn is_idempotent() {
            let c = chars(63, 71, 47);
            assert_eq!(DerivedStats::compute(&c), DerivedStats::compute(&c));
        }

        #[test]
        fn luck_pool_ignores_power() {
            let stats = DerivedStats::compute(&chars(50, 50, 90));
            assert_eq!(stats.luck_tokens, STARTING_LUCK_TOKENS);
        }

        #[test]
        fn current_sanity_capped_at_ninety_nine() {
            let stats = DerivedStats::compute(&chars(50, 50, 100));
            assert_eq!(stats.max_sanity, 100);
            assert_eq!(stats.current_sanity, 99);
        }
    }

    mod recompute {
        use super::*;

        #[test]
        fn current_clamps_down_when_max_shrinks() {
            let mut stats = DerivedStats::compute(&chars(60, 60, 50));
            assert_eq!(stats.max_hit_points, 12);
            stats.set_current(DerivedStatField::HitPoints, 11);

            let next = stats.recompute(&chars(40, 40, 50));
            assert_eq!(next.max_hit_points, 8);
            assert_eq!(next.current_hit_points, 8);
        }

        #[test]
        fn damaged_current_is_kept_when_max_grows() {
            let mut stats = DerivedStats::compute(&chars(50, 50, 50));
            stats.set_current(DerivedStatField::HitPoints, 4);

            let next = stats.recompute(&chars(70, 70, 50));
            assert_eq!(next.max_hit_points, 14);
            assert_eq!(next.current_hit_points, 4);
        }

        #[test]
        fn full_current_follows_max_up() {
            let stats = DerivedStats::compute(&chars(50, 50, 50));
            let next = stats.recompute(&chars(50, 50, 80));
            assert_eq!(next.max_magic_points, 16);
            assert_eq!(next.current_magic_points, 16);
            assert_eq!(next.current_sanity, 80);
        }

        #[test]
        fn luck_tokens_survive_recompute() {
            let mut stats = DerivedStats::default();
            stats.set_current(DerivedStatField::LuckTokens, 2);
            let next = stats.recompute(&chars(30, 30, 30));
            assert_eq!(next.luck_tokens, 2);
        }
    }

    mod current_values {
        use super::*;

        #[test]
        fn set_current_clamps_both_ends() {
            let mut stats = DerivedStats::default();
            assert_eq!(stats.set_current(DerivedStatField::HitPoints, 25), 10);
            assert_eq!(stats.set_current(DerivedStatField::HitPoints, -3), 0);
            assert_eq!(stats.set_current(DerivedStatField::MagicPoints, 7), 7);
        }

        #[test]
        fn adjust_current_applies_delta() {
            let mut stats = DerivedStats::default();
            assert_eq!(stats.adjust_current(DerivedStatField::LuckTokens, -1), 4);
            assert_eq!(stats.adjust_current(DerivedStatField::LuckTokens, 10), 5);
            assert_eq!(stats.adjust_current(DerivedStatField::Sanity, -60), 0);
        }
    }
}
