//! Value objects: immutable-by-convention pieces of a character sheet.

mod characteristics;
mod derived_stats;
mod profile;
mod skill;
mod weapon;

pub use characteristics::{
    Characteristic, Characteristics, DEFAULT_CHARACTERISTIC, MAX_CHARACTERISTIC,
};
pub use derived_stats::{DerivedStatField, DerivedStats};
pub use profile::{
    Backstory, BackstoryField, BasicInfo, BasicInfoField, Status, StatusFlag, StatusNote,
};
pub use skill::Skill;
pub use weapon::Weapon;
