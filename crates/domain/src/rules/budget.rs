//! Skill point budgets.
//!
//! Two pools: occupation points from the occupation's formula (EDU × 4 when
//! none is selected) and personal interest points, always INT × 2.

use serde::{Deserialize, Serialize};

use crate::catalog::Occupation;
use crate::formula::{default_occupation_points, evaluate_occupation_points};
use crate::value_objects::{Characteristic, Characteristics};

pub const PERSONAL_INTEREST_MULTIPLIER: u32 = 2;

/// Which pool a skill allocation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Occupation,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBudget {
    pub occupation_points: u32,
    pub personal_interest_points: u32,
    /// The occupation formula offers a choice nobody has made yet.
    pub unresolved_choice: bool,
}

pub fn personal_interest_points(chars: &Characteristics) -> u32 {
    chars
        .intelligence
        .saturating_mul(PERSONAL_INTEREST_MULTIPLIER)
}

/// Recompute both pools for the given occupation and alternative choice.
pub fn recompute_budgets(
    chars: &Characteristics,
    occupation: Option<&Occupation>,
    choice: Option<Characteristic>,
) -> SkillBudget {
    let (occupation_points, unresolved_choice) = match occupation {
        Some(occupation) => {
            let outcome = evaluate_occupation_points(occupation.skill_points, chars, choice);
            (outcome.points, outcome.unresolved_choice)
        }
        None => (default_occupation_points(chars), false),
    };

    SkillBudget {
        occupation_points,
        personal_interest_points: personal_interest_points(chars),
        unresolved_choice,
    }
}

/// Points spent against points available.
///
/// Overspending is allowed; it shows up as negative remaining points and a
/// progress figure pinned at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub used: u32,
    pub available: u32,
}

impl BudgetUsage {
    pub fn new(used: u32, available: u32) -> Self {
        Self { used, available }
    }

    pub fn remaining(&self) -> i64 {
        i64::from(self.available) - i64::from(self.used)
    }

    pub fn is_over_budget(&self) -> bool {
        self.used > self.available
    }

    /// Share of the budget spent, clamped to `[0, 100]` for display.
    pub fn progress_percent(&self) -> u32 {
        if self.available == 0 {
            return if self.used == 0 { 0 } else { 100 };
        }
        let percent = u64::from(self.used) * 100 / u64::from(self.available);
        percent.min(100) as u32
    }
}
