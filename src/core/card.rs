//! Playing cards: suits, ranks, and the 52 card identities.
//!
//! Card ids are dense: `suit = id / 13`, `rank = id % 13`. Rank 0 is a Two
//! and rank 12 is an Ace, which wraps around to sit next to the Two.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{SpeedError, SpeedResult};

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards in a standard deck.
pub const DECK_SIZE: u8 = 52;

/// Card suit, in id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in id order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Suit for a zero-based index, if valid.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Suit> {
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Card rank, 0 (Two) through 12 (Ace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const TWO: Rank = Rank(0);
    pub const ACE: Rank = Rank(12);

    const NAMES: [&'static str; RANKS_PER_SUIT as usize] = [
        "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
        "King", "Ace",
    ];

    const SHORT: [&'static str; RANKS_PER_SUIT as usize] =
        ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];

    /// Create a rank from its index, if in 0..13.
    #[must_use]
    pub fn new(index: u8) -> Option<Rank> {
        (index < RANKS_PER_SUIT).then_some(Rank(index))
    }

    /// Get the raw rank index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }

    /// Short label ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub fn short(self) -> &'static str {
        Self::SHORT[self.0 as usize]
    }

    /// Absolute rank distance, ignoring wrap-around.
    #[must_use]
    pub fn distance(self, other: Rank) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<u8> for Rank {
    type Error = SpeedError;

    fn try_from(index: u8) -> SpeedResult<Rank> {
        Rank::new(index).ok_or(SpeedError::InvalidRank(index))
    }
}

/// Card identity. Unique across the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

/// An immutable playing card.
///
/// Deserializing checks that suit and rank agree with the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Build the card for an id in 0..52.
    pub fn from_id(id: u8) -> SpeedResult<Card> {
        let suit = Suit::from_index(id / RANKS_PER_SUIT).ok_or(SpeedError::InvalidCardId(id))?;
        Ok(Card {
            id: CardId(id),
            suit,
            rank: Rank(id % RANKS_PER_SUIT),
        })
    }

    /// Build a card from suit and rank.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Card {
        let id = suit as u8 * RANKS_PER_SUIT + rank.index();
        Card {
            id: CardId(id),
            suit,
            rank,
        }
    }

    /// Compact label such as `5♥`.
    #[must_use]
    pub fn short_name(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.symbol())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            id: CardId,
            suit: Suit,
            rank: Rank,
        }

        let fields = Fields::deserialize(deserializer)?;
        let card = Card::from_id(fields.id.0).map_err(de::Error::custom)?;
        if card.suit != fields.suit || card.rank != fields.rank {
            return Err(de::Error::custom(SpeedError::InvalidCardId(fields.id.0)));
        }
        Ok(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// All 52 cards in id order.
pub fn full_deck() -> impl Iterator<Item = Card> {
    Suit::ALL.into_iter().flat_map(|suit| {
        (0..RANKS_PER_SUIT).map(move |rank| Card::new(suit, Rank(rank)))
    })
}
