//! Property tests for card conservation and adjacency.
//!
//! Random legal action sequences from random seeds must never create,
//! drop or duplicate a card, and must respect the hand cap.

use proptest::prelude::*;

use speed_engine::core::{Card, PlayerId, DECK_SIZE};
use speed_engine::{
    apply_action, audit_conservation, is_adjacent, legal_actions, new_game, try_play_card,
    Settings,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: adjacency is symmetric for every pair of cards.
    #[test]
    fn prop_adjacency_symmetric(a in 0..DECK_SIZE, b in 0..DECK_SIZE) {
        let a = Card::from_id(a).unwrap();
        let b = Card::from_id(b).unwrap();
        prop_assert_eq!(is_adjacent(&a, &b), is_adjacent(&b, &a));
    }

    /// Property: any state reachable through legal actions holds all 52 cards once.
    #[test]
    fn prop_random_play_conserves_cards(
        seed in any::<u64>(),
        choices in proptest::collection::vec((0usize..2, any::<prop::sample::Index>()), 0..300),
    ) {
        let mut state = new_game(None, Settings::default().with_seed(seed)).unwrap();

        for (seat, pick) in choices {
            let player = PlayerId::new(seat as u8);
            let actions = legal_actions(&state, player);
            if actions.is_empty() {
                continue;
            }
            let action = &actions[pick.index(actions.len())];
            state = apply_action(&state, player, action).unwrap().state;

            prop_assert!(audit_conservation(&state).is_ok());
            for p in &state.players {
                prop_assert!(p.hand.len() <= state.settings.max_hand_cards);
            }
        }
    }

    /// Property: a rejected play leaves the state exactly as it was.
    #[test]
    fn prop_rejected_play_is_noop(
        seed in any::<u64>(),
        card_id in 0..DECK_SIZE,
        pile in 0usize..3,
    ) {
        let state = new_game(None, Settings::default().with_seed(seed)).unwrap();
        let before = state.clone();
        let card = Card::from_id(card_id).unwrap();

        if try_play_card(&state, PlayerId::new(0), card, pile).is_err() {
            prop_assert_eq!(state, before);
        }
    }
}
