//! Time and dice ports, swapped for scripted doubles in tests.

use chrono::{DateTime, Utc};
use investigator_domain::CharacterId;

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of percentile rolls and fresh sheet identities.
#[cfg_attr(test, mockall::automock)]
pub trait DicePort: Send + Sync {
    /// A d100 roll in `1..=100`.
    fn roll_d100(&self) -> u32;
    fn new_character_id(&self) -> CharacterId;
}
