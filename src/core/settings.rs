//! Game settings.
//!
//! Settings travel inside every `GameState`, so a snapshot always knows its
//! own hand cap and whether its shuffles are reproducible.

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::{SpeedError, SpeedResult};

/// Cards dealt into each hand at the start of a game.
pub const STARTING_HAND: usize = 5;

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hand size cap enforced on pickup (default: 5).
    pub max_hand_cards: usize,

    /// Seed for every shuffle in the game.
    /// `None` draws a fresh seed per shuffle, so games are not reproducible.
    pub random_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_hand_cards: STARTING_HAND,
            random_seed: None,
        }
    }
}

impl Settings {
    /// Seeded settings for a given date, shared by everyone playing that day.
    #[must_use]
    pub fn daily(year: i32, month: u32, day: u32) -> Self {
        let mut hasher = FxHasher::default();
        ("speed-daily", year, month, day).hash(&mut hasher);
        Self::default().with_seed(hasher.finish())
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_hand_cards(mut self, max: usize) -> Self {
        self.max_hand_cards = max;
        self
    }

    /// Reject settings under which the opening deal would break the hand cap.
    pub fn validate(&self) -> SpeedResult<()> {
        if self.max_hand_cards < STARTING_HAND {
            return Err(SpeedError::InvalidSettings(format!(
                "max_hand_cards must be at least {STARTING_HAND}, got {}",
                self.max_hand_cards
            )));
        }
        Ok(())
    }
}
