//! Use cases - User story orchestration.
//!
//! Use cases load documents through the repository ports, run the domain
//! aggregate and save the result.

pub mod character_sheet;

pub use character_sheet::CharacterSheetUseCases;
