//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (could swap the in-memory map for a database)
//! - Clock and dice (scripted in tests)

mod error;
mod repos;
mod time_and_dice;

pub use error::RepoError;
pub use repos::*;
pub use time_and_dice::*;
