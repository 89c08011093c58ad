//! Derived attribute formulas.
//!
//! Pure functions of the characteristics; no randomness, no age adjustment.

use crate::value_objects::Characteristics;

/// Flat house-rule luck token pool. Not derived from POW.
pub const STARTING_LUCK_TOKENS: u32 = 5;

/// Current sanity never rises above this, whatever POW says.
pub const SANITY_CEILING: u32 = 99;

/// Ascending inclusive upper bounds on STR + SIZ with the matching
/// damage bonus and build. Anything above the last bound is `+5d6` / 6.
const DAMAGE_BONUS_TABLE: [(u32, &str, i32); 8] = [
    (64, "-2", -2),
    (84, "-1", -1),
    (124, "0", 0),
    (164, "+1d4", 1),
    (204, "+1d6", 2),
    (284, "+2d6", 3),
    (364, "+3d6", 4),
    (444, "+4d6", 5),
];

const TOP_DAMAGE_BONUS: (&str, i32) = ("+5d6", 6);

/// Calculate HP from CON and SIZ.
pub fn hit_points(con: u32, siz: u32) -> u32 {
    (con + siz) / 10
}

/// Calculate magic points from POW.
pub fn magic_points(pow: u32) -> u32 {
    pow / 5
}

/// Calculate starting (maximum) sanity from POW.
pub fn starting_sanity(pow: u32) -> u32 {
    pow
}

/// Calculate move rate from STR, DEX, SIZ.
pub fn movement_rate(str_val: u32, dex: u32, siz: u32) -> u32 {
    if str_val < siz && dex < siz {
        7
    } else if str_val >= siz && dex >= siz {
        9
    } else {
        8
    }
}

/// Damage bonus expression and build for a STR + SIZ total.
pub fn damage_bonus_and_build(str_val: u32, siz: u32) -> (&'static str, i32) {
    let total = str_val + siz;
    DAMAGE_BONUS_TABLE
        .iter()
        .find(|(bound, _, _)| total <= *bound)
        .map(|(_, bonus, build)| (*bonus, *build))
        .unwrap_or(TOP_DAMAGE_BONUS)
}

/// Convenience wrapper reading the relevant characteristics.
pub fn movement_rate_for(chars: &Characteristics) -> u32 {
    movement_rate(chars.strength, chars.dexterity, chars.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_calculation() {
        assert_eq!(hit_points(50, 60), 11);
        assert_eq!(hit_points(60, 65), 12);
        assert_eq!(hit_points(0, 9), 0);
    }

    #[test]
    fn hp_matches_floor_over_valid_range() {
        for con in (0..=100).step_by(7) {
            for siz in (0..=100).step_by(11) {
                assert_eq!(hit_points(con, siz), (con + siz) / 10);
            }
        }
    }

    #[test]
    fn magic_points_calculation() {
        assert_eq!(magic_points(47), 9);
        assert_eq!(magic_points(50), 10);
        assert_eq!(magic_points(4), 0);
    }

    #[test]
    fn move_rate_calculation() {
        // Both DEX and STR < SIZ
        assert_eq!(movement_rate(40, 40, 60), 7);
        // Both DEX and STR >= SIZ, equality counts
        assert_eq!(movement_rate(50, 50, 50), 9);
        assert_eq!(movement_rate(60, 60, 40), 9);
        // Mixed
        assert_eq!(movement_rate(70, 30, 50), 8);
        assert_eq!(movement_rate(30, 70, 50), 8);
    }

    #[test]
    fn damage_bonus_band_boundaries() {
        let cases = [
            (64, "-2", -2),
            (65, "-1", -1),
            (84, "-1", -1),
            (85, "0", 0),
            (124, "0", 0),
            (125, "+1d4", 1),
            (164, "+1d4", 1),
            (165, "+1d6", 2),
            (204, "+1d6", 2),
            (205, "+2d6", 3),
            (284, "+2d6", 3),
            (285, "+3d6", 4),
            (364, "+3d6", 4),
            (365, "+4d6", 5),
            (444, "+4d6", 5),
            (445, "+5d6", 6),
        ];
        for (total, bonus, build) in cases {
            // Split the total across STR and SIZ; only the sum matters.
            let str_val = total / 2;
            let siz = total - str_val;
            assert_eq!(
                damage_bonus_and_build(str_val, siz),
                (bonus, build),
                "STR+SIZ = {}",
                total
            );
        }
    }

    #[test]
    fn damage_bonus_at_zero() {
        assert_eq!(damage_bonus_and_build(0, 0), ("-2", -2));
    }
}
