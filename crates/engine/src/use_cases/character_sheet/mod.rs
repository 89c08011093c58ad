//! Character sheet use cases.
//!
//! Loads a stored sheet, applies edits through the aggregate and saves the
//! result. Each call is one load/save cycle; a script of edits is applied to a
//! working copy and saved only if every edit succeeds.

mod error;

pub use error::CharacterSheetError;

use std::sync::Arc;

use investigator_domain::{
    BasicInfoField, BudgetUsage, Character, CharacterDocument, CharacterEdit, CharacterId,
    CharacterSummary, CharacterUpdate, Characteristic, DomainError, SuccessLevel,
};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, DicePort};

// =============================================================================
// Result Types
// =============================================================================

/// Result of applying a single edit.
#[derive(Debug, Clone)]
pub struct EditResult {
    pub document: CharacterDocument,
    pub update: CharacterUpdate,
}

/// Result of applying a script of edits.
#[derive(Debug, Clone)]
pub struct ScriptResult {
    pub document: CharacterDocument,
    /// One update per edit, in order.
    pub updates: Vec<CharacterUpdate>,
}

/// Budget state for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetReport {
    pub occupation: BudgetUsage,
    pub personal: BudgetUsage,
    pub unresolved_choice: bool,
    /// Characteristics offered by the occupation formula's alternatives.
    pub choice_options: Vec<Characteristic>,
}

/// Outcome of a percentile skill roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRoll {
    pub skill: String,
    pub chance: u32,
    pub roll: u32,
    pub level: SuccessLevel,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    character_repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
    dice: Arc<dyn DicePort>,
}

impl CharacterSheetUseCases {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        dice: Arc<dyn DicePort>,
    ) -> Self {
        Self {
            character_repo,
            clock,
            dice,
        }
    }

    /// Create and store a fresh sheet.
    pub async fn create(&self, name: Option<String>) -> Result<CharacterDocument, CharacterSheetError> {
        let mut character = Character::new();
        if let Some(name) = name {
            character.set_basic_info(BasicInfoField::Name, name);
        }

        let id = self.dice.new_character_id();
        let document = CharacterDocument::new(id, character, self.clock.now());
        self.character_repo.save(&document).await?;

        tracing::info!(
            character_id = %id,
            name = %document.character.name(),
            "Created character sheet"
        );

        Ok(document)
    }

    pub async fn get(&self, id: CharacterId) -> Result<CharacterDocument, CharacterSheetError> {
        self.character_repo
            .get(id)
            .await?
            .ok_or(CharacterSheetError::CharacterNotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<CharacterSummary>, CharacterSheetError> {
        Ok(self.character_repo.list().await?)
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), CharacterSheetError> {
        self.character_repo.delete(id).await.map_err(|err| {
            if err.is_not_found() {
                CharacterSheetError::CharacterNotFound(id)
            } else {
                err.into()
            }
        })?;

        tracing::info!(character_id = %id, "Deleted character sheet");
        Ok(())
    }

    /// Apply one edit and save. Nothing is saved when the edit is rejected.
    pub async fn apply_edit(
        &self,
        id: CharacterId,
        edit: CharacterEdit,
    ) -> Result<EditResult, CharacterSheetError> {
        let mut document = self.get(id).await?;
        let edit_name = edit.name();

        let mut character = document.character.clone();
        let update = character.apply(edit)?;
        document.touch(character, self.clock.now());
        self.character_repo.save(&document).await?;

        tracing::info!(
            character_id = %id,
            edit = edit_name,
            update = update.kind(),
            "Applied character edit"
        );

        Ok(EditResult { document, update })
    }

    /// Apply edits in order. The first failing edit aborts the whole script.
    pub async fn apply_script(
        &self,
        id: CharacterId,
        edits: Vec<CharacterEdit>,
    ) -> Result<ScriptResult, CharacterSheetError> {
        let mut document = self.get(id).await?;
        let mut character = document.character.clone();
        let mut updates = Vec::with_capacity(edits.len());

        for (step, edit) in edits.into_iter().enumerate() {
            let edit_name = edit.name();
            let update = character.apply(edit).map_err(|source| {
                tracing::warn!(
                    character_id = %id,
                    step,
                    edit = edit_name,
                    error = %source,
                    "Script edit rejected"
                );
                CharacterSheetError::ScriptStep {
                    step,
                    edit: edit_name,
                    source,
                }
            })?;
            updates.push(update);
        }

        document.touch(character, self.clock.now());
        self.character_repo.save(&document).await?;

        tracing::info!(
            character_id = %id,
            edits = updates.len(),
            "Applied edit script"
        );

        Ok(ScriptResult { document, updates })
    }

    pub async fn budget_report(&self, id: CharacterId) -> Result<BudgetReport, CharacterSheetError> {
        let document = self.get(id).await?;
        Ok(budget_report(&document.character))
    }

    /// Roll d100 against a skill's chance.
    pub async fn roll_skill(
        &self,
        id: CharacterId,
        skill: &str,
    ) -> Result<SkillRoll, CharacterSheetError> {
        let document = self.get(id).await?;
        let character = &document.character;
        let name = character
            .skill(skill)
            .map(|s| s.name.clone())
            .ok_or_else(|| DomainError::not_found("Skill", skill))?;

        let roll = self.dice.roll_d100().clamp(1, 100);
        let chance = character.skill_chance(&name);
        let level = character.check_skill(&name, roll);

        tracing::info!(
            character_id = %id,
            skill = %name,
            chance,
            roll,
            level = ?level,
            "Rolled skill check"
        );

        Ok(SkillRoll {
            skill: name,
            chance,
            roll,
            level,
        })
    }
}

pub fn budget_report(character: &Character) -> BudgetReport {
    BudgetReport {
        occupation: character.occupation_budget(),
        personal: character.personal_budget(),
        unresolved_choice: character.has_unresolved_occupation_choice(),
        choice_options: character.occupation_choice_options(),
    }
}
