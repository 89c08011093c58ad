//! Aggregate mutation outcomes.
//!
//! Return types from character mutations, communicating what happened when
//! state was modified.

pub mod character_events;

pub use character_events::CharacterUpdate;
