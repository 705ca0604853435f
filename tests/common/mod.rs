//! Shared fixtures for integration tests.

#![allow(dead_code)]

use speed_engine::core::{Card, GameState, Rank, Settings, Suit};

pub fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap())
}

/// Two empty seats named Alice and Bob, with the given center tops.
pub fn table(tops: [u8; 2]) -> GameState {
    let mut state = GameState::new(["Alice".into(), "Bob".into()], Settings::default());
    state.center_piles[0].push(card(Suit::Clubs, tops[0]));
    state.center_piles[1].push(card(Suit::Spades, tops[1]));
    state
}
