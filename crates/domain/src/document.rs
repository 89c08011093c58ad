//! Stored form of a character sheet.
//!
//! The sheet is kept as an opaque document keyed by an externally assigned id.
//! Listings only need a name/occupation pair, exposed as `CharacterSummary`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregates::Character;
use crate::ids::CharacterId;

pub const UNNAMED: &str = "Unnamed";
pub const NO_OCCUPATION: &str = "No occupation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    pub id: CharacterId,
    pub updated_at: DateTime<Utc>,
    pub character: Character,
}

impl CharacterDocument {
    pub fn new(id: CharacterId, character: Character, now: DateTime<Utc>) -> Self {
        Self {
            id,
            updated_at: now,
            character,
        }
    }

    /// Replace the sheet and bump the timestamp.
    pub fn touch(&mut self, character: Character, now: DateTime<Utc>) {
        self.character = character;
        self.updated_at = now;
    }

    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary::from(self)
    }
}

/// Listing entry for a stored sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub name: String,
    pub occupation: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&CharacterDocument> for CharacterSummary {
    fn from(document: &CharacterDocument) -> Self {
        let info = document.character.basic_info();
        Self {
            id: document.id,
            name: non_blank_or(&info.name, UNNAMED),
            occupation: non_blank_or(&info.occupation, NO_OCCUPATION),
            updated_at: document.updated_at,
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::BasicInfoField;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn summary_falls_back_for_blank_fields() {
        let document = CharacterDocument::new(CharacterId::new(), Character::new(), fixed_time());
        let summary = document.summary();
        assert_eq!(summary.name, UNNAMED);
        assert_eq!(summary.occupation, NO_OCCUPATION);
        assert_eq!(summary.id, document.id);
    }

    #[test]
    fn summary_uses_sheet_identity() {
        let mut character = Character::new();
        character.set_basic_info(BasicInfoField::Name, "Ada Byron".into());
        character.select_occupation("Professor").unwrap();
        let document = CharacterDocument::new(CharacterId::new(), character, fixed_time());

        let summary = document.summary();
        assert_eq!(summary.name, "Ada Byron");
        assert_eq!(summary.occupation, "Professor");
    }

    #[test]
    fn touch_replaces_sheet_and_timestamp() {
        let mut document =
            CharacterDocument::new(CharacterId::new(), Character::new(), fixed_time());
        let mut character = Character::new();
        character.set_basic_info(BasicInfoField::Player, "Sam".into());
        let later = Utc.timestamp_opt(1_700_000_600, 0).unwrap();

        document.touch(character.clone(), later);
        assert_eq!(document.character, character);
        assert_eq!(document.updated_at, later);
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut character = Character::new();
        character.select_occupation("Journalist").unwrap();
        let document = CharacterDocument::new(CharacterId::new(), character, fixed_time());

        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("updatedAt").is_some());
        let restored: CharacterDocument = serde_json::from_value(value).unwrap();
        assert_eq!(restored, document);
    }
}
