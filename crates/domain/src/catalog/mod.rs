//! Static reference catalogs: skills, occupations and weapons.
//!
//! The rules engine only reads from these.

pub mod occupations;
pub mod skills;
pub mod weapons;

pub use occupations::{find_occupation, CreditRating, Era, Occupation, SkillChoice, OCCUPATIONS};
pub use skills::{base_value, find_skill, BaseValue, SkillCategory, SkillDefinition, SKILLS};
pub use weapons::{find_weapon, WeaponCategory, WeaponDefinition, WEAPONS};
