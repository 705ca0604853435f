//! Error taxonomy for every fallible engine operation.
//!
//! All failures here are expected game flow: an illegal move, a full hand,
//! a player asking for a top-up too early. They are returned, never thrown,
//! and a failed call leaves the caller's state untouched.

use thiserror::Error;

use crate::core::{Card, PlayerId};

/// Result alias used across the engine.
pub type SpeedResult<T> = Result<T, SpeedError>;

/// Why an operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpeedError {
    // === Validation ===
    #[error("player index {0} out of range")]
    PlayerOutOfRange(usize),

    #[error("pile index {0} out of range")]
    PileOutOfRange(usize),

    #[error("card {card} not in {player}'s hand")]
    CardNotInHand { card: Card, player: PlayerId },

    #[error("card {card} cannot be played onto {top} (rank {} vs {})", rank_of(.card), rank_of(.top))]
    NotAdjacent { card: Card, top: Card },

    #[error("no playable pile for {0}")]
    NoPlayablePile(Card),

    #[error("no valid play")]
    NoValidPlay,

    #[error("hand full")]
    HandFull,

    #[error("nothing to pick up")]
    KittyEmpty,

    #[error("already requesting top-up")]
    AlreadyRequestingTopUp,

    #[error("player can still play or pick up")]
    CanStillMove,

    #[error("not all players requesting top-up")]
    NotAllRequesting,

    #[error("no winner yet")]
    NoWinnerYet,

    #[error("invalid card id {0}")]
    InvalidCardId(u8),

    #[error("invalid rank {0}")]
    InvalidRank(u8),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    // === Resource exhaustion ===
    #[error("nothing to replenish from")]
    NothingToReplenish,

    #[error("card conservation violated: {0}")]
    Conservation(String),
}

fn rank_of(card: &Card) -> u8 {
    card.rank.index()
}
