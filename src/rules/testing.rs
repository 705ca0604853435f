//! Fixtures for rules tests: hand-built tables with chosen ranks.

use crate::core::{Card, GameState, PlayerId, Rank, Settings, Suit, CENTER_PILE_COUNT};

pub(crate) fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).expect("rank in 0..13"))
}

/// Table with the given hand ranks and center tops. Empty kitties and top-up piles.
///
/// Player 0 holds Hearts, player 1 Diamonds; center piles hold Clubs and Spades.
pub(crate) fn table(hands: &[&[u8]; 2], tops: [Option<u8>; CENTER_PILE_COUNT]) -> GameState {
    let mut state = GameState::new(["Alice".into(), "Bob".into()], Settings::default());

    for (player, ranks) in PlayerId::all().zip(hands.iter()) {
        let suit = if player.index() == 0 { Suit::Hearts } else { Suit::Diamonds };
        for &rank in ranks.iter() {
            state.players[player.index()].hand.push_back(card(suit, rank));
        }
    }
    for (i, top) in tops.into_iter().enumerate() {
        if let Some(rank) = top {
            let suit = if i == 0 { Suit::Clubs } else { Suit::Spades };
            state.center_piles[i].push(card(suit, rank));
        }
    }

    state
}
