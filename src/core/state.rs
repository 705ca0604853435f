//! Game state.
//!
//! ## GameState
//!
//! The complete, immutable snapshot of a game:
//! - Both players (hand, kitty, top-up pile, request flag)
//! - Both center piles
//! - Settings
//! - Move history
//! - Cards taken out of play by an uneven replenish
//!
//! Every zone is an `im::Vector`, so cloning a state is O(1) per zone and a
//! transition shares all untouched structure with its predecessor.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::moves::Move;
use super::pile::{CenterPile, CENTER_PILE_COUNT};
use super::player::{Player, PlayerId, PLAYER_COUNT};
use super::settings::Settings;
use crate::error::{SpeedError, SpeedResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; PLAYER_COUNT],

    pub center_piles: [CenterPile; CENTER_PILE_COUNT],

    pub settings: Settings,

    /// Append-only record of successful transitions.
    pub move_history: Vector<Move>,

    /// Replenish remainders that could not be split evenly.
    pub discarded: Vector<Card>,
}

impl GameState {
    /// Empty table with two named seats. Dealing fills it in.
    #[must_use]
    pub fn new(names: [String; PLAYER_COUNT], settings: Settings) -> Self {
        let [first, second] = names;
        Self {
            players: [
                Player::new(PlayerId::new(0), first),
                Player::new(PlayerId::new(1), second),
            ],
            center_piles: [CenterPile::new(), CenterPile::new()],
            settings,
            move_history: Vector::new(),
            discarded: Vector::new(),
        }
    }

    // === Lookup ===

    /// Get a player, rejecting out-of-range seats.
    pub fn player(&self, player: PlayerId) -> SpeedResult<&Player> {
        self.players
            .get(player.index())
            .ok_or(SpeedError::PlayerOutOfRange(player.index()))
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> SpeedResult<&mut Player> {
        self.players
            .get_mut(player.index())
            .ok_or(SpeedError::PlayerOutOfRange(player.index()))
    }

    /// Get a center pile, rejecting out-of-range indices.
    pub fn center_pile(&self, index: usize) -> SpeedResult<&CenterPile> {
        self.center_piles
            .get(index)
            .ok_or(SpeedError::PileOutOfRange(index))
    }

    /// Top card of a center pile, if any.
    #[must_use]
    pub fn center_top(&self, index: usize) -> Option<&Card> {
        self.center_piles.get(index).and_then(CenterPile::top)
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter_players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::all().zip(self.players.iter())
    }

    /// Every seat has flagged a top-up request.
    #[must_use]
    pub fn all_requesting_top_up(&self) -> bool {
        self.players.iter().all(|p| p.requesting_top_up)
    }

    /// Cards across both center piles.
    #[must_use]
    pub fn center_card_count(&self) -> usize {
        self.center_piles.iter().map(CenterPile::len).sum()
    }

    /// Most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    // === History ===

    pub(crate) fn record(&mut self, mv: Move) {
        self.move_history.push_back(mv);
    }
}
