//! Repository port traits for character storage.

use async_trait::async_trait;
use investigator_domain::{CharacterDocument, CharacterId, CharacterSummary};

use super::error::RepoError;

// =============================================================================
// Character Storage
// =============================================================================

/// Stores character sheets as whole documents. Last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<CharacterDocument>, RepoError>;
    async fn save(&self, document: &CharacterDocument) -> Result<(), RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;

    /// Listing entries, most recently updated first.
    async fn list(&self) -> Result<Vec<CharacterSummary>, RepoError>;
}
