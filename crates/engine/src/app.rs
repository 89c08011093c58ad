//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    dice::{SystemClock, SystemDice},
    memory::InMemoryCharacterRepo,
    ports::{CharacterRepo, ClockPort, DicePort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the repository ports and the use cases built on them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: use_cases::CharacterSheetUseCases,
}

impl App {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        dice: Arc<dyn DicePort>,
    ) -> Self {
        let repositories = Repositories {
            character: character_repo,
        };

        let use_cases = UseCases {
            character_sheet: use_cases::CharacterSheetUseCases::new(
                repositories.character.clone(),
                clock,
                dice,
            ),
        };

        Self {
            repositories,
            use_cases,
        }
    }

    /// In-memory storage with the system clock and dice.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCharacterRepo::new()),
            Arc::new(SystemClock),
            Arc::new(SystemDice),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn use_cases_share_the_repository() {
        let app = App::in_memory();
        let document = app
            .use_cases
            .character_sheet
            .create(Some("Ada".into()))
            .await
            .unwrap();

        let stored = app.repositories.character.get(document.id).await.unwrap();
        assert_eq!(stored, Some(document));
    }
}
