//! Move validation: pure predicates over a state snapshot.
//!
//! Nothing here changes state. The transition engine and the bot both ask
//! these questions before acting, and a hosting layer may call them against
//! any consistent snapshot without coordination.

use crate::core::{Card, GameState, PlayerId, CENTER_PILE_COUNT};
use crate::error::{SpeedError, SpeedResult};

/// Check whether two cards are one rank apart, with Ace wrapping to Two.
///
/// ```
/// use speed_engine::core::Card;
/// use speed_engine::rules::is_adjacent;
///
/// let two = Card::from_id(0).unwrap();
/// let three = Card::from_id(1).unwrap();
/// let ace = Card::from_id(12).unwrap();
///
/// assert!(is_adjacent(&two, &three));
/// assert!(is_adjacent(&ace, &two));
/// assert!(!is_adjacent(&two, &two));
/// ```
#[must_use]
pub fn is_adjacent(a: &Card, b: &Card) -> bool {
    matches!(a.rank.distance(b.rank), 1 | 12)
}

/// First center pile (in index order) whose top card accepts `card`.
pub fn card_has_play(state: &GameState, card: &Card) -> SpeedResult<usize> {
    (0..CENTER_PILE_COUNT)
        .find(|&i| state.center_top(i).is_some_and(|top| is_adjacent(card, top)))
        .ok_or(SpeedError::NoPlayablePile(*card))
}

/// First card in the player's hand (in hand order) that can be played, with its pile.
pub fn player_has_play(state: &GameState, player: PlayerId) -> SpeedResult<(Card, usize)> {
    state
        .player(player)?
        .hand
        .iter()
        .find_map(|card| card_has_play(state, card).ok().map(|pile| (*card, pile)))
        .ok_or(SpeedError::NoValidPlay)
}

/// Whether the player may move the top kitty card into their hand.
pub fn can_pickup_from_kitty(state: &GameState, player: PlayerId) -> SpeedResult<()> {
    let p = state.player(player)?;
    if p.hand.len() >= state.settings.max_hand_cards {
        return Err(SpeedError::HandFull);
    }
    if p.kitty.is_empty() {
        return Err(SpeedError::KittyEmpty);
    }
    Ok(())
}

/// Whether the player is provably stuck: no play and no pickup.
pub fn can_request_top_up(state: &GameState, player: PlayerId) -> SpeedResult<()> {
    state.player(player)?;
    if player_has_play(state, player).is_ok() || can_pickup_from_kitty(state, player).is_ok() {
        return Err(SpeedError::CanStillMove);
    }
    Ok(())
}

/// The first seat (lower index wins ties) with an empty hand and kitty.
pub fn try_get_winner(state: &GameState) -> SpeedResult<PlayerId> {
    state
        .iter_players()
        .find(|(_, p)| p.is_out())
        .map(|(id, _)| id)
        .ok_or(SpeedError::NoWinnerYet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Settings, Suit};
    use crate::rules::testing::{card, table};

    #[test]
    fn test_adjacency_symmetric_and_wraps() {
        for a in 0..13u8 {
            for b in 0..13u8 {
                let x = card(Suit::Hearts, a);
                let y = card(Suit::Spades, b);
                assert_eq!(is_adjacent(&x, &y), is_adjacent(&y, &x));
            }
        }
        assert!(is_adjacent(&card(Suit::Clubs, 0), &card(Suit::Hearts, 12)));
        assert!(!is_adjacent(&card(Suit::Clubs, 1), &card(Suit::Clubs, 3)));
        assert!(!is_adjacent(&card(Suit::Clubs, 5), &card(Suit::Hearts, 5)));
    }

    #[test]
    fn test_card_has_play_prefers_lower_pile() {
        let state = table(&[&[], &[]], [Some(4), Some(6)]);
        let five = card(Suit::Diamonds, 5);

        assert_eq!(card_has_play(&state, &five), Ok(0));
        assert_eq!(card_has_play(&state, &card(Suit::Diamonds, 7)), Ok(1));
        assert_eq!(
            card_has_play(&state, &card(Suit::Diamonds, 10)),
            Err(SpeedError::NoPlayablePile(card(Suit::Diamonds, 10)))
        );
    }

    #[test]
    fn test_card_has_play_skips_empty_pile() {
        let state = table(&[&[], &[]], [None, Some(3)]);
        assert_eq!(card_has_play(&state, &card(Suit::Hearts, 2)), Ok(1));
        assert!(card_has_play(&state, &card(Suit::Hearts, 9)).is_err());
    }

    #[test]
    fn test_player_has_play_scans_hand_order() {
        let state = table(&[&[9, 2, 4], &[]], [Some(3), Some(8)]);

        let (found, pile) = player_has_play(&state, PlayerId::new(0)).unwrap();
        assert_eq!(found.rank, Rank::new(9).unwrap());
        assert_eq!(pile, 1);

        assert_eq!(player_has_play(&state, PlayerId::new(1)), Err(SpeedError::NoValidPlay));
        assert_eq!(
            player_has_play(&state, PlayerId::new(4)),
            Err(SpeedError::PlayerOutOfRange(4))
        );
    }

    #[test]
    fn test_pickup_gating() {
        let mut state = table(&[&[0, 1, 2, 3, 4], &[5]], [Some(10), Some(10)]);
        state.players[0].kitty.push_back(card(Suit::Spades, 7));

        assert_eq!(can_pickup_from_kitty(&state, PlayerId::new(0)), Err(SpeedError::HandFull));
        assert_eq!(can_pickup_from_kitty(&state, PlayerId::new(1)), Err(SpeedError::KittyEmpty));

        state.players[1].kitty.push_back(card(Suit::Spades, 8));
        assert_eq!(can_pickup_from_kitty(&state, PlayerId::new(1)), Ok(()));
    }

    #[test]
    fn test_pickup_respects_configured_cap() {
        let mut state = table(&[&[0, 1, 2, 3, 4], &[]], [Some(10), Some(10)]);
        state.settings = Settings::default().with_max_hand_cards(6);
        state.players[0].kitty.push_back(card(Suit::Spades, 7));

        assert_eq!(can_pickup_from_kitty(&state, PlayerId::new(0)), Ok(()));
    }

    #[test]
    fn test_request_top_up_requires_stuck_player() {
        let state = table(&[&[6], &[2]], [Some(10), Some(10)]);
        assert_eq!(can_request_top_up(&state, PlayerId::new(0)), Ok(()));

        let playable = table(&[&[9], &[]], [Some(10), Some(10)]);
        assert_eq!(
            can_request_top_up(&playable, PlayerId::new(0)),
            Err(SpeedError::CanStillMove)
        );

        let mut can_pick = table(&[&[6], &[]], [Some(10), Some(10)]);
        can_pick.players[0].kitty.push_back(card(Suit::Clubs, 0));
        assert_eq!(
            can_request_top_up(&can_pick, PlayerId::new(0)),
            Err(SpeedError::CanStillMove)
        );
    }

    #[test]
    fn test_winner_detection() {
        let mut state = table(&[&[3], &[]], [Some(10), Some(10)]);
        state.players[1].kitty.push_back(card(Suit::Clubs, 0));
        assert_eq!(try_get_winner(&state), Err(SpeedError::NoWinnerYet));

        state.players[1].kitty.clear();
        assert_eq!(try_get_winner(&state), Ok(PlayerId::new(1)));
    }

    #[test]
    fn test_winner_tie_goes_to_lower_index() {
        let state = table(&[&[], &[]], [Some(10), Some(10)]);
        assert_eq!(try_get_winner(&state), Ok(PlayerId::new(0)));
    }
}
