//! Character sheet mutation outcomes
//!
//! Every aggregate mutation returns one of these so callers can react (log,
//! refresh a view, flag a budget overflow) without diffing the sheet.

use serde::Serialize;

use crate::rules::{PointKind, SkillBudget};
use crate::value_objects::{
    BackstoryField, BasicInfoField, Characteristic, DerivedStatField, StatusFlag, StatusNote,
};

/// Outcome of a single character edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CharacterUpdate {
    /// A characteristic changed; derived stats, bases and budgets followed.
    CharacteristicChanged {
        characteristic: Characteristic,
        from: u32,
        to: u32,
        budget: SkillBudget,
    },
    /// A new occupation replaced the old one and occupation points were reset.
    OccupationSelected {
        from: Option<String>,
        to: String,
        budget: SkillBudget,
    },
    OccupationCleared {
        from: Option<String>,
        budget: SkillBudget,
    },
    OccupationChoiceApplied {
        choice: Option<Characteristic>,
        budget: SkillBudget,
    },
    SkillPointsAllocated {
        skill: String,
        kind: PointKind,
        from: u32,
        to: u32,
        /// The pool is overspent after this allocation.
        over_budget: bool,
    },
    SpecializationChanged {
        skill: String,
        from: Option<String>,
        to: Option<String>,
    },
    OccupationSkillsSelected {
        skills: Vec<String>,
        /// Skills that left the occupational set and lost their occupation points.
        cleared: Vec<String>,
    },
    DerivedStatChanged {
        field: DerivedStatField,
        from: u32,
        to: u32,
    },
    WeaponAdded {
        index: usize,
        name: String,
    },
    WeaponRemoved {
        index: usize,
        name: String,
    },
    BasicInfoChanged {
        field: BasicInfoField,
        from: String,
        to: String,
    },
    BackstoryChanged {
        field: BackstoryField,
    },
    StatusFlagChanged {
        flag: StatusFlag,
        from: bool,
        to: bool,
    },
    StatusNoteChanged {
        note: StatusNote,
    },
}

impl CharacterUpdate {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CharacteristicChanged { .. } => "characteristic_changed",
            Self::OccupationSelected { .. } => "occupation_selected",
            Self::OccupationCleared { .. } => "occupation_cleared",
            Self::OccupationChoiceApplied { .. } => "occupation_choice_applied",
            Self::SkillPointsAllocated { .. } => "skill_points_allocated",
            Self::SpecializationChanged { .. } => "specialization_changed",
            Self::OccupationSkillsSelected { .. } => "occupation_skills_selected",
            Self::DerivedStatChanged { .. } => "derived_stat_changed",
            Self::WeaponAdded { .. } => "weapon_added",
            Self::WeaponRemoved { .. } => "weapon_removed",
            Self::BasicInfoChanged { .. } => "basic_info_changed",
            Self::BackstoryChanged { .. } => "backstory_changed",
            Self::StatusFlagChanged { .. } => "status_flag_changed",
            Self::StatusNoteChanged { .. } => "status_note_changed",
        }
    }

    /// Whether the edit changed skill point budgets.
    pub fn affects_budget(&self) -> bool {
        matches!(
            self,
            Self::CharacteristicChanged { .. }
                | Self::OccupationSelected { .. }
                | Self::OccupationCleared { .. }
                | Self::OccupationChoiceApplied { .. }
        )
    }
}
