//! Character edits as data.
//!
//! `CharacterEdit` is the closed set of every sheet mutation, serde-tagged so a
//! front end or a script can send edits as JSON:
//!
//! ```json
//! { "type": "set_characteristic", "characteristic": "EDU", "value": 70 }
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregates::Character;
use crate::error::DomainError;
use crate::events::CharacterUpdate;
use crate::rules::PointKind;
use crate::value_objects::{
    BackstoryField, BasicInfoField, Characteristic, DerivedStatField, StatusFlag, StatusNote,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CharacterEdit {
    SetCharacteristic {
        characteristic: Characteristic,
        value: i32,
    },
    SelectOccupation {
        name: String,
    },
    ClearOccupation,
    ApplyOccupationChoice {
        #[serde(default)]
        choice: Option<Characteristic>,
    },
    SelectOccupationSkills {
        extra: Vec<String>,
    },
    AllocateSkillPoints {
        skill: String,
        points: i32,
        kind: PointKind,
    },
    SetSpecialization {
        skill: String,
        #[serde(default)]
        label: Option<String>,
    },
    SetDerivedCurrent {
        field: DerivedStatField,
        value: i64,
    },
    AdjustDerivedCurrent {
        field: DerivedStatField,
        delta: i64,
    },
    AddWeapon {
        name: String,
    },
    RemoveWeapon {
        index: usize,
    },
    SetBasicInfo {
        field: BasicInfoField,
        value: String,
    },
    SetBackstory {
        field: BackstoryField,
        value: String,
    },
    SetStatusFlag {
        flag: StatusFlag,
        value: bool,
    },
    SetStatusNote {
        note: StatusNote,
        value: String,
    },
}

impl CharacterEdit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetCharacteristic { .. } => "set_characteristic",
            Self::SelectOccupation { .. } => "select_occupation",
            Self::ClearOccupation => "clear_occupation",
            Self::ApplyOccupationChoice { .. } => "apply_occupation_choice",
            Self::SelectOccupationSkills { .. } => "select_occupation_skills",
            Self::AllocateSkillPoints { .. } => "allocate_skill_points",
            Self::SetSpecialization { .. } => "set_specialization",
            Self::SetDerivedCurrent { .. } => "set_derived_current",
            Self::AdjustDerivedCurrent { .. } => "adjust_derived_current",
            Self::AddWeapon { .. } => "add_weapon",
            Self::RemoveWeapon { .. } => "remove_weapon",
            Self::SetBasicInfo { .. } => "set_basic_info",
            Self::SetBackstory { .. } => "set_backstory",
            Self::SetStatusFlag { .. } => "set_status_flag",
            Self::SetStatusNote { .. } => "set_status_note",
        }
    }
}

impl Character {
    /// Dispatch an edit to the matching mutation.
    pub fn apply(&mut self, edit: CharacterEdit) -> Result<CharacterUpdate, DomainError> {
        match edit {
            CharacterEdit::SetCharacteristic {
                characteristic,
                value,
            } => self.set_characteristic(characteristic, value),
            CharacterEdit::SelectOccupation { name } => self.select_occupation(&name),
            CharacterEdit::ClearOccupation => Ok(self.clear_occupation()),
            CharacterEdit::ApplyOccupationChoice { choice } => self.apply_occupation_choice(choice),
            CharacterEdit::SelectOccupationSkills { extra } => self.select_occupation_skills(extra),
            CharacterEdit::AllocateSkillPoints {
                skill,
                points,
                kind,
            } => self.allocate_skill_points(&skill, points, kind),
            CharacterEdit::SetSpecialization { skill, label } => {
                self.set_specialization(&skill, label)
            }
            CharacterEdit::SetDerivedCurrent { field, value } => {
                Ok(self.set_derived_current(field, value))
            }
            CharacterEdit::AdjustDerivedCurrent { field, delta } => {
                Ok(self.adjust_derived_current(field, delta))
            }
            CharacterEdit::AddWeapon { name } => self.add_weapon(&name),
            CharacterEdit::RemoveWeapon { index } => self.remove_weapon(index),
            CharacterEdit::SetBasicInfo { field, value } => Ok(self.set_basic_info(field, value)),
            CharacterEdit::SetBackstory { field, value } => Ok(self.set_backstory(field, value)),
            CharacterEdit::SetStatusFlag { flag, value } => Ok(self.set_status_flag(flag, value)),
            CharacterEdit::SetStatusNote { note, value } => Ok(self.set_status_note(note, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_deserialize_from_tagged_json() {
        let edits: Vec<CharacterEdit> = serde_json::from_str(
            r#"[
                {"type": "set_characteristic", "characteristic": "EDU", "value": 60},
                {"type": "select_occupation", "name": "Farmer"},
                {"type": "apply_occupation_choice", "choice": "DEX"},
                {"type": "allocate_skill_points", "skill": "Track", "points": 30, "kind": "occupation"},
                {"type": "adjust_derived_current", "field": "hit_points", "delta": -3},
                {"type": "set_basic_info", "field": "name", "value": "Ada"},
                {"type": "clear_occupation"}
            ]"#,
        )
        .unwrap();

        assert_eq!(edits.len(), 7);
        assert_eq!(
            edits[0],
            CharacterEdit::SetCharacteristic {
                characteristic: Characteristic::Edu,
                value: 60
            }
        );
        assert_eq!(edits[6], CharacterEdit::ClearOccupation);
    }

    #[test]
    fn missing_choice_means_none() {
        let edit: CharacterEdit =
            serde_json::from_str(r#"{"type": "apply_occupation_choice"}"#).unwrap();
        assert_eq!(edit, CharacterEdit::ApplyOccupationChoice { choice: None });
    }

    #[test]
    fn apply_dispatches_to_the_aggregate() {
        let mut character = Character::new();
        let script = vec![
            CharacterEdit::SetCharacteristic {
                characteristic: Characteristic::Edu,
                value: 60,
            },
            CharacterEdit::SetCharacteristic {
                characteristic: Characteristic::Dex,
                value: 70,
            },
            CharacterEdit::SelectOccupation {
                name: "Farmer".into(),
            },
            CharacterEdit::ApplyOccupationChoice {
                choice: Some(Characteristic::Dex),
            },
            CharacterEdit::AllocateSkillPoints {
                skill: "Track".into(),
                points: 30,
                kind: PointKind::Occupation,
            },
            CharacterEdit::AdjustDerivedCurrent {
                field: DerivedStatField::HitPoints,
                delta: -3,
            },
        ];

        let updates: Vec<CharacterUpdate> = script
            .into_iter()
            .map(|edit| character.apply(edit))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(updates.len(), 6);
        assert_eq!(character.occupation_skill_points(), 260);
        assert_eq!(character.skill_total("Track"), 40);
        assert_eq!(character.derived_stats().current_hit_points, 7);
    }

    #[test]
    fn apply_surfaces_domain_errors() {
        let mut character = Character::new();
        let err = character
            .apply(CharacterEdit::AllocateSkillPoints {
                skill: "Dodge".into(),
                points: -1,
                kind: PointKind::Personal,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidAllocation { .. }));
    }
}
