//! Deck construction and the opening deal.
//!
//! Each seat receives a hand, a kitty and a top-up pile, and each center pile
//! gets one starter card. The pile sizes account for the full deck exactly:
//! 2 × (5 + 15 + 5) + 2 = 52.

mod dealing;

pub use dealing::{new_game, shuffled_deck, GameBuilder, KITTY_SIZE, TOP_UP_SIZE};
