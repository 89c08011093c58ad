//! System clock and dice, plus scripted doubles for tests.

use chrono::{DateTime, Utc};
use investigator_domain::CharacterId;
use rand::Rng;

use crate::infrastructure::ports::{ClockPort, DicePort};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Rolls on the thread-local RNG and mints v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDice;

impl DicePort for SystemDice {
    fn roll_d100(&self) -> u32 {
        rand::thread_rng().gen_range(1..=100)
    }

    fn new_character_id(&self) -> CharacterId {
        CharacterId::new()
    }
}

#[cfg(test)]
pub use scripted::{FixedClock, ScriptedDice};

#[cfg(test)]
mod scripted {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use super::*;

    pub struct FixedClock(pub DateTime<Utc>);

    impl ClockPort for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Replays the given rolls in order, then keeps repeating the last one.
    /// Sheet ids count up from 1 so several sheets can coexist.
    pub struct ScriptedDice {
        rolls: Mutex<VecDeque<u32>>,
        last: Mutex<u32>,
        issued: AtomicU64,
    }

    impl ScriptedDice {
        pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
            Self {
                rolls: Mutex::new(rolls.into_iter().collect()),
                last: Mutex::new(100),
                issued: AtomicU64::new(0),
            }
        }

        /// The id the `n`th call to `new_character_id` hands out.
        pub fn nth_id(n: u64) -> CharacterId {
            CharacterId::from_uuid(uuid::Uuid::from_u128(u128::from(n)))
        }
    }

    impl DicePort for ScriptedDice {
        fn roll_d100(&self) -> u32 {
            let mut last = self.last.lock().unwrap();
            if let Some(next) = self.rolls.lock().unwrap().pop_front() {
                *last = next;
            }
            *last
        }

        fn new_character_id(&self) -> CharacterId {
            Self::nth_id(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_dice_stay_on_the_percentile_die() {
        let dice = SystemDice;
        for _ in 0..200 {
            assert!((1..=100).contains(&dice.roll_d100()));
        }
        assert_ne!(dice.new_character_id(), dice.new_character_id());
    }

    #[test]
    fn scripted_dice_replay_then_repeat() {
        let dice = ScriptedDice::new([3, 97]);
        assert_eq!(dice.roll_d100(), 3);
        assert_eq!(dice.roll_d100(), 97);
        assert_eq!(dice.roll_d100(), 97);
    }

    #[test]
    fn scripted_ids_count_up() {
        let dice = ScriptedDice::new(Vec::new());
        assert_eq!(dice.new_character_id(), ScriptedDice::nth_id(1));
        assert_eq!(dice.new_character_id(), ScriptedDice::nth_id(2));
    }
}
