//! Automated opponent.
//!
//! The bot is a pure function of (state, seat): it keeps no memory between
//! calls, so a scheduler can invoke it on any cadence as long as it
//! serializes calls per game. Pacing lives with the scheduler; `BotProfile`
//! only supplies the delay bounds it should sample from.
//!
//! - `policy`: fixed-priority move choice (`decide`, `bot_move`)
//! - `profile`: difficulty presets and delay sampling
//! - `simulate`: headless bot-vs-bot playout

pub mod policy;
pub mod profile;
pub mod simulate;

pub use policy::{bot_move, decide, BotDecision};
pub use profile::{BotProfile, BotProfiles};
pub use simulate::{play_out, Playout};
