//! Character sheet operation errors.

use crate::infrastructure::ports::RepoError;
use investigator_domain::{CharacterId, DomainError};

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Edit {step} ({edit}) failed: {source}")]
    ScriptStep {
        step: usize,
        edit: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
