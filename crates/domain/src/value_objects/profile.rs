//! Free-text parts of the sheet: identity, backstory and condition.
//!
//! Each section is edited one field at a time through a closed field enum.

use serde::{Deserialize, Serialize};

/// Identity fields. Occupation is only set through occupation selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub player: String,
    pub occupation: String,
    pub age: String,
    pub sex: String,
    pub residence: String,
    pub birthplace: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicInfoField {
    Name,
    Player,
    Age,
    Sex,
    Residence,
    Birthplace,
}

impl BasicInfo {
    pub fn get(&self, field: BasicInfoField) -> &str {
        match field {
            BasicInfoField::Name => &self.name,
            BasicInfoField::Player => &self.player,
            BasicInfoField::Age => &self.age,
            BasicInfoField::Sex => &self.sex,
            BasicInfoField::Residence => &self.residence,
            BasicInfoField::Birthplace => &self.birthplace,
        }
    }

    /// Replace a field, returning the previous value.
    pub fn set(&mut self, field: BasicInfoField, value: String) -> String {
        let slot = match field {
            BasicInfoField::Name => &mut self.name,
            BasicInfoField::Player => &mut self.player,
            BasicInfoField::Age => &mut self.age,
            BasicInfoField::Sex => &mut self.sex,
            BasicInfoField::Residence => &mut self.residence,
            BasicInfoField::Birthplace => &mut self.birthplace,
        };
        std::mem::replace(slot, value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backstory {
    pub personal_description: String,
    pub ideology: String,
    pub significant_people: String,
    pub meaningful_locations: String,
    pub treasured_possessions: String,
    pub traits: String,
    pub injuries_and_scars: String,
    pub phobias_and_manias: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackstoryField {
    PersonalDescription,
    Ideology,
    SignificantPeople,
    MeaningfulLocations,
    TreasuredPossessions,
    Traits,
    InjuriesAndScars,
    PhobiasAndManias,
}

impl Backstory {
    pub fn get(&self, field: BackstoryField) -> &str {
        match field {
            BackstoryField::PersonalDescription => &self.personal_description,
            BackstoryField::Ideology => &self.ideology,
            BackstoryField::SignificantPeople => &self.significant_people,
            BackstoryField::MeaningfulLocations => &self.meaningful_locations,
            BackstoryField::TreasuredPossessions => &self.treasured_possessions,
            BackstoryField::Traits => &self.traits,
            BackstoryField::InjuriesAndScars => &self.injuries_and_scars,
            BackstoryField::PhobiasAndManias => &self.phobias_and_manias,
        }
    }

    /// Replace a field, returning the previous value.
    pub fn set(&mut self, field: BackstoryField, value: String) -> String {
        let slot = match field {
            BackstoryField::PersonalDescription => &mut self.personal_description,
            BackstoryField::Ideology => &mut self.ideology,
            BackstoryField::SignificantPeople => &mut self.significant_people,
            BackstoryField::MeaningfulLocations => &mut self.meaningful_locations,
            BackstoryField::TreasuredPossessions => &mut self.treasured_possessions,
            BackstoryField::Traits => &mut self.traits,
            BackstoryField::InjuriesAndScars => &mut self.injuries_and_scars,
            BackstoryField::PhobiasAndManias => &mut self.phobias_and_manias,
        };
        std::mem::replace(slot, value)
    }
}

/// Condition flags and notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub severe_injury: bool,
    pub dying: bool,
    pub temporary_insanity: bool,
    pub indefinite_insanity: bool,
    pub wounds_and_scars: String,
    pub manias_and_phobias: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFlag {
    SevereInjury,
    Dying,
    TemporaryInsanity,
    IndefiniteInsanity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusNote {
    WoundsAndScars,
    ManiasAndPhobias,
}

impl Status {
    pub fn flag(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::SevereInjury => self.severe_injury,
            StatusFlag::Dying => self.dying,
            StatusFlag::TemporaryInsanity => self.temporary_insanity,
            StatusFlag::IndefiniteInsanity => self.indefinite_insanity,
        }
    }

    /// Set a flag, returning the previous value.
    pub fn set_flag(&mut self, flag: StatusFlag, value: bool) -> bool {
        let slot = match flag {
            StatusFlag::SevereInjury => &mut self.severe_injury,
            StatusFlag::Dying => &mut self.dying,
            StatusFlag::TemporaryInsanity => &mut self.temporary_insanity,
            StatusFlag::IndefiniteInsanity => &mut self.indefinite_insanity,
        };
        std::mem::replace(slot, value)
    }

    pub fn note(&self, note: StatusNote) -> &str {
        match note {
            StatusNote::WoundsAndScars => &self.wounds_and_scars,
            StatusNote::ManiasAndPhobias => &self.manias_and_phobias,
        }
    }

    pub fn set_note(&mut self, note: StatusNote, value: String) -> String {
        let slot = match note {
            StatusNote::WoundsAndScars => &mut self.wounds_and_scars,
            StatusNote::ManiasAndPhobias => &mut self.manias_and_phobias,
        };
        std::mem::replace(slot, value)
    }

    /// Any of the four condition flags is raised.
    pub fn is_impaired(&self) -> bool {
        self.severe_injury || self.dying || self.temporary_insanity || self.indefinite_insanity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_info_set_returns_previous() {
        let mut info = BasicInfo::default();
        assert_eq!(info.set(BasicInfoField::Name, "Harvey Walters".into()), "");
        assert_eq!(info.set(BasicInfoField::Name, "Harvey".into()), "Harvey Walters");
        assert_eq!(info.get(BasicInfoField::Name), "Harvey");
    }

    #[test]
    fn backstory_fields_are_independent() {
        let mut backstory = Backstory::default();
        backstory.set(BackstoryField::Ideology, "Science explains all".into());
        assert_eq!(backstory.get(BackstoryField::Ideology), "Science explains all");
        assert_eq!(backstory.get(BackstoryField::Traits), "");
    }

    #[test]
    fn status_flags_and_notes() {
        let mut status = Status::default();
        assert!(!status.is_impaired());
        assert!(!status.set_flag(StatusFlag::Dying, true));
        assert!(status.flag(StatusFlag::Dying));
        assert!(status.is_impaired());
        status.set_note(StatusNote::ManiasAndPhobias, "Fear of water".into());
        assert_eq!(status.note(StatusNote::ManiasAndPhobias), "Fear of water");
    }

    #[test]
    fn serde_uses_camel_case() {
        let value = serde_json::to_value(Status::default()).unwrap();
        assert_eq!(value["severeInjury"], false);
        assert_eq!(value["woundsAndScars"], "");
    }
}
