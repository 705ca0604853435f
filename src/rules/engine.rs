//! State transition engine.
//!
//! The only code that derives a new `GameState`. Each transition validates
//! against the input snapshot, clones it (cheap: zones are persistent
//! vectors), edits the clone and returns it. On error the input is untouched
//! and the caller keeps what it had.
//!
//! ## Top-up cycle
//!
//! ```text
//! Normal ──(player stuck)──> Requesting(partial) ──(other stuck too)──> TopUp ──> Normal
//!    ^                              │
//!    └────(other player's play unblocks the requester)
//! ```

use tracing::debug;

use crate::core::{Card, GameRng, GameState, Move, PlayerId, PLAYER_COUNT};
use crate::error::{SpeedError, SpeedResult};

use super::validator::{can_pickup_from_kitty, can_request_top_up, is_adjacent, player_has_play};

/// Play a card from the player's hand onto a center pile.
///
/// Any player who was waiting on a top-up and can now play has their
/// request cleared, since the new top card is shared.
pub fn try_play_card(
    state: &GameState,
    player: PlayerId,
    card: Card,
    center_pile: usize,
) -> SpeedResult<GameState> {
    let pile = state.center_pile(center_pile)?;
    if !state.player(player)?.holds(&card) {
        return Err(SpeedError::CardNotInHand { card, player });
    }
    let top = pile.top().ok_or(SpeedError::NoPlayablePile(card))?;
    if !is_adjacent(&card, top) {
        return Err(SpeedError::NotAdjacent { card, top: *top });
    }

    let mut next = state.clone();
    let played = next
        .player_mut(player)?
        .take_from_hand(card.id)
        .ok_or(SpeedError::CardNotInHand { card, player })?;
    next.center_piles[center_pile].push(played);
    next.record(Move::play(player, played.id, center_pile));

    for seat in PlayerId::all() {
        if next.players[seat.index()].requesting_top_up && player_has_play(&next, seat).is_ok() {
            next.players[seat.index()].requesting_top_up = false;
            debug!(%seat, "top-up request cleared by new center card");
        }
    }

    debug!(%player, card = %played.short_name(), pile = center_pile, "played card");
    Ok(next)
}

/// Move the top kitty card into the player's hand. Returns the card picked up.
pub fn try_pickup_from_kitty(
    state: &GameState,
    player: PlayerId,
) -> SpeedResult<(GameState, Card)> {
    can_pickup_from_kitty(state, player)?;

    let mut next = state.clone();
    let seat = next.player_mut(player)?;
    let card = seat.kitty.pop_back().ok_or(SpeedError::KittyEmpty)?;
    seat.hand.push_back(card);
    next.record(Move::pickup(player, card.id));

    debug!(%player, card = %card.short_name(), "picked up from kitty");
    Ok((next, card))
}

/// Flag the player as stuck.
///
/// The returned flag is true when every seat is now requesting. With
/// `immediate` set, that case also performs the top-up before returning.
pub fn try_request_top_up(
    state: &GameState,
    player: PlayerId,
    immediate: bool,
) -> SpeedResult<(GameState, bool)> {
    if state.player(player)?.requesting_top_up {
        return Err(SpeedError::AlreadyRequestingTopUp);
    }
    can_request_top_up(state, player)?;

    let mut next = state.clone();
    next.player_mut(player)?.requesting_top_up = true;
    next.record(Move::request_top_up(player));
    debug!(%player, "requested top-up");

    let all_ready = next.all_requesting_top_up();
    if all_ready && immediate {
        return try_top_up(&next).map(|topped| (topped, true));
    }
    Ok((next, all_ready))
}

/// Restart play: each seat turns its top-up card onto its own center pile.
///
/// Empty top-up piles are first refilled from the center piles.
pub fn try_top_up(state: &GameState) -> SpeedResult<GameState> {
    if !state.all_requesting_top_up() {
        return Err(SpeedError::NotAllRequesting);
    }

    let mut next = if state.players.iter().any(|p| p.top_up.is_empty()) {
        replenish_top_up_cards(state)?
    } else {
        state.clone()
    };

    for seat in PlayerId::all() {
        let player = &mut next.players[seat.index()];
        let card = player.top_up.pop_back().ok_or(SpeedError::NothingToReplenish)?;
        player.requesting_top_up = false;
        next.center_piles[seat.index()].push(card);
    }
    next.record(Move::top_up());

    debug!(
        first = ?next.center_top(0).map(Card::short_name),
        second = ?next.center_top(1).map(Card::short_name),
        "topped up center piles"
    );
    Ok(next)
}

/// Gather both center piles, shuffle, and split them across the top-up piles.
///
/// The shuffle reuses the configured seed so seeded games stay reproducible.
/// Cards left over after an even split go to the discard and leave play.
pub fn replenish_top_up_cards(state: &GameState) -> SpeedResult<GameState> {
    if state.center_card_count() == 0 {
        return Err(SpeedError::NothingToReplenish);
    }

    let mut next = state.clone();
    let mut pool: Vec<Card> = next
        .center_piles
        .iter_mut()
        .flat_map(|pile| pile.drain())
        .collect();
    GameRng::for_seed(next.settings.random_seed).shuffle(&mut pool);

    let share = pool.len() / PLAYER_COUNT;
    let mut cards = pool.into_iter();
    for player in next.players.iter_mut() {
        player.top_up.extend(cards.by_ref().take(share));
    }
    let remainder: Vec<Card> = cards.collect();
    next.discarded.extend(remainder.iter().copied());

    debug!(share, discarded = remainder.len(), "replenished top-up piles");
    Ok(next)
}
