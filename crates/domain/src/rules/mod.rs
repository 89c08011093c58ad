//! Character rules: derived attributes, budgets, checks and skill resolution.

pub mod budget;
pub mod checks;
pub mod derived;
pub mod resolver;

pub use budget::{personal_interest_points, recompute_budgets, BudgetUsage, PointKind, SkillBudget};
pub use checks::{check_success, fifth_value, half_value, is_fumble, percentile_chance, SuccessLevel};
pub use resolver::{resolve_skill, Resolution, ResolutionRule};
