//! Player identification and per-player card zones.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Speed is strictly two-player, so valid ids are 0 and 1.
//!
//! ## Player
//!
//! A seat's hand, reserve ("kitty") and top-up pile, plus the
//! requesting-top-up flag. Zones are persistent vectors so snapshots share
//! structure; the top of a pile is the end of its vector.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier. Player indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over both seats in index order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat's cards and status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Playable cards, in deal/pickup order.
    pub hand: Vector<Card>,

    /// Private draw pile (top = end).
    pub kitty: Vector<Card>,

    /// Cards reserved for restarting the center piles (top = end).
    pub top_up: Vector<Card>,

    /// Stuck and waiting for the other seat to also be stuck.
    pub requesting_top_up: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
            kitty: Vector::new(),
            top_up: Vector::new(),
            requesting_top_up: false,
        }
    }

    /// Check whether this exact card is in the player's hand.
    ///
    /// Compares the whole card, so a matching id with another suit or rank
    /// does not count.
    #[must_use]
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.iter().any(|c| c == card)
    }

    /// Remove a card from hand, returning it if present.
    pub fn take_from_hand(&mut self, card: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(pos))
    }

    /// Both hand and reserve are empty.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.is_empty() && self.kitty.is_empty()
    }

    /// Cards this player still has to get rid of.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.hand.len() + self.kitty.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p1), "Player 1");
        assert_eq!(PlayerId::all().collect::<Vec<_>>(), vec![p0, p1]);
    }

    #[test]
    fn test_take_from_hand() {
        let mut player = Player::new(PlayerId::new(0), "Alice");
        player.hand.push_back(Card::from_id(4).unwrap());
        player.hand.push_back(Card::from_id(9).unwrap());

        let nine = Card::from_id(9).unwrap();
        assert!(player.holds(&nine));
        let relabeled = Card { rank: Card::from_id(10).unwrap().rank, ..nine };
        assert!(!player.holds(&relabeled));
        assert_eq!(player.take_from_hand(CardId(4)).map(|c| c.id), Some(CardId(4)));
        assert_eq!(player.take_from_hand(CardId(4)), None);
        assert_eq!(player.hand.len(), 1);
    }

    #[test]
    fn test_is_out() {
        let mut player = Player::new(PlayerId::new(1), "Bob");
        assert!(player.is_out());

        player.kitty.push_back(Card::from_id(0).unwrap());
        assert!(!player.is_out());
        assert_eq!(player.cards_remaining(), 1);
    }
}
