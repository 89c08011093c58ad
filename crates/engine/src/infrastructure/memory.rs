//! In-memory character storage.
//!
//! Documents are kept as `serde_json::Value` so every save and load goes
//! through the same serialization a persistent store would use.

use async_trait::async_trait;
use dashmap::DashMap;
use investigator_domain::{CharacterDocument, CharacterId, CharacterSummary};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

#[derive(Default)]
pub struct InMemoryCharacterRepo {
    documents: DashMap<CharacterId, serde_json::Value>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<CharacterDocument>, RepoError> {
        let Some(value) = self.documents.get(&id).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(RepoError::serialization)
    }

    async fn save(&self, document: &CharacterDocument) -> Result<(), RepoError> {
        let value = serde_json::to_value(document).map_err(RepoError::serialization)?;
        self.documents.insert(document.id, value);
        tracing::debug!(character_id = %document.id, "Saved character document");
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Character", id))
    }

    async fn list(&self) -> Result<Vec<CharacterSummary>, RepoError> {
        let mut summaries = self
            .documents
            .iter()
            .map(|entry| {
                serde_json::from_value::<CharacterDocument>(entry.value().clone())
                    .map(|document| document.summary())
                    .map_err(RepoError::serialization)
            })
            .collect::<Result<Vec<_>, _>>()?;
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use investigator_domain::{
        BasicInfoField, Character, Characteristic, PointKind, StatusFlag,
    };

    fn document_at(secs: i64, name: &str) -> CharacterDocument {
        let mut character = Character::new();
        character.set_basic_info(BasicInfoField::Name, name.to_string());
        CharacterDocument::new(
            CharacterId::new(),
            character,
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn save_then_get_round_trips_every_field() {
        let repo = InMemoryCharacterRepo::new();
        let mut character = Character::new();
        character.set_characteristic(Characteristic::Edu, 70).unwrap();
        character.select_occupation("Farmer").unwrap();
        character
            .apply_occupation_choice(Some(Characteristic::Str))
            .unwrap();
        character
            .allocate_skill_points("Track", 20, PointKind::Occupation)
            .unwrap();
        character
            .set_specialization("Art/Craft", Some("Farming".into()))
            .unwrap();
        character.add_weapon("Wood Axe").unwrap();
        character.set_status_flag(StatusFlag::Dying, true);
        let document = CharacterDocument::new(
            CharacterId::new(),
            character,
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        );

        repo.save(&document).await.unwrap();
        let loaded = repo.get(document.id).await.unwrap().unwrap();
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn missing_document_is_none() {
        let repo = InMemoryCharacterRepo::new();
        assert!(repo.get(CharacterId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites() {
        let repo = InMemoryCharacterRepo::new();
        let mut document = document_at(1_700_000_000, "First");
        repo.save(&document).await.unwrap();

        document.character.set_basic_info(BasicInfoField::Name, "Second".into());
        repo.save(&document).await.unwrap();

        assert_eq!(repo.len(), 1);
        let loaded = repo.get(document.id).await.unwrap().unwrap();
        assert_eq!(loaded.character.name(), "Second");
    }

    #[tokio::test]
    async fn list_is_newest_first_with_fallback_labels() {
        let repo = InMemoryCharacterRepo::new();
        repo.save(&document_at(1_700_000_000, "Older")).await.unwrap();
        repo.save(&document_at(1_700_000_500, "")).await.unwrap();

        let summaries = repo.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Unnamed");
        assert_eq!(summaries[0].occupation, "No occupation");
        assert_eq!(summaries[1].name, "Older");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryCharacterRepo::new();
        let document = document_at(1_700_000_000, "Gone");
        repo.save(&document).await.unwrap();
        repo.delete(document.id).await.unwrap();
        assert!(repo.is_empty());

        let err = repo.delete(document.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
