//! Investigator character rules engine.
//!
//! Pure, synchronous rules for a percentile-skill investigator sheet: derived
//! stats, occupation skill point formulas, skill budgets, skill resolution and
//! the character aggregate that ties them together.

pub mod aggregates;
pub mod catalog;
pub mod commands;
pub mod document;
pub mod error;
pub mod events;
pub mod formula;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use aggregates::Character;
pub use commands::CharacterEdit;
pub use document::{CharacterDocument, CharacterSummary};
pub use error::DomainError;
pub use events::CharacterUpdate;
pub use formula::{evaluate_occupation_points, FormulaError, FormulaOutcome, OccupationFormula};
pub use ids::CharacterId;
pub use rules::{BudgetUsage, PointKind, SkillBudget, SuccessLevel};
pub use value_objects::{
    Backstory, BackstoryField, BasicInfo, BasicInfoField, Characteristic, Characteristics,
    DerivedStatField, DerivedStats, Skill, Status, StatusFlag, StatusNote, Weapon,
};
