//! Bot policy and playout tests.

mod common;

use common::{card, table};
use speed_engine::core::{PlayerId, Suit};
use speed_engine::{
    audit_conservation, bot_move, decide, new_game, play_out, Action, BotDecision, BotProfiles,
    GameRng, Settings,
};

const ALICE: PlayerId = PlayerId::new(0);
const BOB: PlayerId = PlayerId::new(1);

/// The bot is a pure function: same input, same output.
#[test]
fn test_bot_is_stateless() {
    let state = new_game(None, Settings::default().with_seed(4)).unwrap();

    let first = bot_move(&state, ALICE).unwrap();
    let second = bot_move(&state, ALICE).unwrap();

    assert_eq!(first, second);
}

/// Plays beat pickups even when both are available.
#[test]
fn test_play_preferred_over_pickup() {
    let mut state = table([3, 9]);
    state.players[1].hand.push_back(card(Suit::Diamonds, 8));
    state.players[1].kitty.push_back(card(Suit::Diamonds, 0));

    assert_eq!(
        decide(&state, BOB),
        Ok(BotDecision::Act(Action::PlayCard { card: card(Suit::Diamonds, 8), pile: 1 }))
    );
}

/// Two stuck bots restart the game between them.
#[test]
fn test_two_stuck_bots_top_up() {
    let mut state = table([6, 6]);
    state.players[0].hand.push_back(card(Suit::Hearts, 0));
    state.players[1].hand.push_back(card(Suit::Diamonds, 0));
    state.players[0].top_up.push_back(card(Suit::Hearts, 1));
    state.players[1].top_up.push_back(card(Suit::Diamonds, 12));

    let (state, first) = bot_move(&state, ALICE).unwrap();
    assert_eq!(first, "Alice requested a top-up");

    // Still waiting: a pass, not an error.
    let (state, pass) = bot_move(&state, ALICE).unwrap();
    assert!(pass.is_empty());

    let (state, second) = bot_move(&state, BOB).unwrap();
    assert_eq!(second, "Bob requested a top-up; Center piles topped up");
    assert_eq!(state.center_top(0), Some(&card(Suit::Hearts, 1)));

    // Alice's Two now sits next to her own Three.
    let (_, third) = bot_move(&state, ALICE).unwrap();
    assert_eq!(third, "Alice played Two of Hearts onto pile 1");
}

/// Long bot-vs-bot games never lose or duplicate a card.
#[test]
fn test_playouts_conserve_cards() {
    for seed in 0..10 {
        let state = new_game(None, Settings::default().with_seed(seed)).unwrap();
        let playout = play_out(&state, 1_000).unwrap();

        assert!(audit_conservation(&playout.state).is_ok(), "seed {seed}");
        for player in &playout.state.players {
            assert!(player.hand.len() <= playout.state.settings.max_hand_cards);
        }
        if let Some(winner) = playout.winner {
            assert!(playout.state.players[winner.index()].is_out());
        }
    }
}

/// The daily challenge deals and plays out the same for everyone.
#[test]
fn test_daily_challenge_replays() {
    let settings = Settings::daily(2026, 10, 16);
    let a = play_out(&new_game(None, settings.clone()).unwrap(), 500).unwrap();
    let b = play_out(&new_game(None, settings).unwrap(), 500).unwrap();

    assert_eq!(a.state, b.state);
    assert_eq!(a.winner, b.winner);
}

/// A scheduler samples pacing from an injected profile table.
#[test]
fn test_scheduler_pacing() {
    let profiles = BotProfiles::default();
    let medium = profiles.get("Medium").unwrap();
    let mut rng = GameRng::new(10);

    let delay = medium.response_delay(&mut rng);
    assert!(delay >= medium.quickest && delay <= medium.slowest);
}
