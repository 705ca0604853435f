//! # speed-engine
//!
//! Rules engine for Speed, the two-player card game where both players race,
//! without turns, to empty their hand and kitty onto two shared center piles.
//!
//! ## Design Principles
//!
//! 1. **Pure**: no I/O, no timers, no transport. Every operation maps a
//!    state snapshot and inputs to a new state or a typed error.
//!
//! 2. **Persistent state**: zones are `im` vectors, so a transition shares
//!    all untouched structure with the snapshot it came from and old
//!    snapshots stay valid.
//!
//! 3. **Deterministic**: a seeded game deals, replenishes and plays out
//!    identically every time.
//!
//! ## Concurrency
//!
//! Hosts must allow at most one in-flight transition per game (one actor
//! per room, or a per-game mutex). Read-only queries such as
//! `try_get_winner` and `player_has_play` can run against any snapshot.
//!
//! ## Modules
//!
//! - `core`: cards, players, piles, settings, moves, state, RNG
//! - `zones`: card location lookup and the conservation audit
//! - `deck`: deck construction and dealing
//! - `rules`: validator, transition engine, caller-facing actions
//! - `bot`: fixed-priority bot, difficulty profiles, headless playout
//! - `error`: `SpeedError` and `SpeedResult`

pub mod core;
pub mod zones;
pub mod deck;
pub mod rules;
pub mod bot;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CenterPile, GameRng, GameState, Move, MoveKind, Player, PlayerId, Rank,
    Settings, Suit,
};

pub use crate::zones::{audit_conservation, locate, Zone};

pub use crate::deck::{new_game, GameBuilder};

pub use crate::rules::{
    apply_action, can_pickup_from_kitty, can_request_top_up, card_has_play, is_adjacent,
    legal_actions, player_has_play, replenish_top_up_cards, try_get_winner,
    try_pickup_from_kitty, try_play_card, try_request_top_up, try_top_up, Action, ActionOutcome,
};

pub use crate::bot::{bot_move, decide, play_out, BotDecision, BotProfile, BotProfiles, Playout};

pub use crate::error::{SpeedError, SpeedResult};
