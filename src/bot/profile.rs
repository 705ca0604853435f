//! Bot difficulty presets.
//!
//! A profile is configuration data for whoever drives the bot loop: how
//! quickly it should answer and what it says. The lookup is passed to the
//! loop by value, never held globally.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::GameRng;

/// Response-time bounds and flavor text for one difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotProfile {
    pub name: String,

    /// Fastest response the scheduler should allow.
    pub quickest: Duration,

    /// Slowest response the scheduler should allow.
    pub slowest: Duration,

    /// Lines the host may show when the bot is introduced.
    pub taunts: Vec<String>,
}

impl BotProfile {
    pub fn new(name: impl Into<String>, quickest_ms: u64, slowest_ms: u64) -> Self {
        Self {
            name: name.into(),
            quickest: Duration::from_millis(quickest_ms.min(slowest_ms)),
            slowest: Duration::from_millis(quickest_ms.max(slowest_ms)),
            taunts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_taunt(mut self, line: impl Into<String>) -> Self {
        self.taunts.push(line.into());
        self
    }

    /// Sample a delay uniformly from `[quickest, slowest]`.
    pub fn response_delay(&self, rng: &mut GameRng) -> Duration {
        let lo = self.quickest.as_millis() as u64;
        let hi = self.slowest.as_millis() as u64;
        Duration::from_millis(rng.gen_range_inclusive(lo..=hi))
    }

    /// Pick a flavor line, if the profile has any.
    pub fn taunt(&self, rng: &mut GameRng) -> Option<&str> {
        rng.choose(&self.taunts).map(String::as_str)
    }

    pub fn easy() -> Self {
        Self::new("Easy", 2_000, 4_000).with_taunt("Take your time, I certainly will.")
    }

    pub fn medium() -> Self {
        Self::new("Medium", 1_200, 2_500).with_taunt("Let's see what you've got.")
    }

    pub fn hard() -> Self {
        Self::new("Hard", 700, 1_500)
            .with_taunt("Blink and you'll miss it.")
            .with_taunt("Try to keep up.")
    }

    pub fn expert() -> Self {
        Self::new("Expert", 350, 900).with_taunt("I've already won. You just don't know it yet.")
    }
}

/// Named profiles, looked up case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotProfiles {
    profiles: Vec<BotProfile>,
}

impl Default for BotProfiles {
    fn default() -> Self {
        Self::new(vec![
            BotProfile::easy(),
            BotProfile::medium(),
            BotProfile::hard(),
            BotProfile::expert(),
        ])
    }
}

impl BotProfiles {
    #[must_use]
    pub fn new(profiles: Vec<BotProfile>) -> Self {
        Self { profiles }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BotProfile> {
        self.profiles.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }
}
