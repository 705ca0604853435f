//! Shared center piles. Only the top card (end of the vector) matters for play.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Number of shared center piles.
pub const CENTER_PILE_COUNT: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterPile {
    pub cards: Vector<Card>,
}

impl CenterPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top card, or `None` while the pile is empty between a replenish and a top-up.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove every card, leaving the pile empty.
    pub fn drain(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }
}
