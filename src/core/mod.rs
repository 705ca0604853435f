//! Core value model: cards, players, piles, settings, moves, state, RNG.
//!
//! Everything here is plain data. The only code that produces a new
//! `GameState` from an old one lives in `rules::engine`.

pub mod card;
pub mod player;
pub mod pile;
pub mod settings;
pub mod moves;
pub mod rng;
pub mod state;

pub use card::{full_deck, Card, CardId, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use player::{Player, PlayerId, PLAYER_COUNT};
pub use pile::{CenterPile, CENTER_PILE_COUNT};
pub use settings::{Settings, STARTING_HAND};
pub use moves::{Move, MoveKind};
pub use rng::GameRng;
pub use state::GameState;
