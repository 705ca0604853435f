//! Caller-facing actions.
//!
//! A hosting layer that receives moves from a client, or a console loop
//! parsing keystrokes, can express every player move as an `Action` and
//! hand it to `apply_action` instead of calling each transition directly.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameState, PlayerId, CENTER_PILE_COUNT};
use crate::error::SpeedResult;

use super::engine::{try_pickup_from_kitty, try_play_card, try_request_top_up};
use super::validator::{can_pickup_from_kitty, can_request_top_up, is_adjacent};

/// A move a single player can ask for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Play a hand card onto a center pile.
    PlayCard { card: Card, pile: usize },
    /// Pick up the top kitty card.
    Pickup,
    /// Declare being stuck. Tops up immediately once both players are stuck.
    RequestTopUp,
}

/// New state after an action, with a line describing what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: GameState,
    pub description: String,
}

impl ActionOutcome {
    fn described(state: GameState, skip: usize) -> Self {
        let description = state
            .move_history
            .iter()
            .skip(skip)
            .map(|m| m.describe(&state))
            .collect::<Vec<_>>()
            .join("; ");
        Self { state, description }
    }
}

/// Every action the player could legally take right now.
///
/// Plays come first, in hand order then pile order.
#[must_use]
pub fn legal_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    let Ok(seat) = state.player(player) else {
        return Vec::new();
    };

    let mut actions: Vec<Action> = seat
        .hand
        .iter()
        .flat_map(|card| {
            (0..CENTER_PILE_COUNT)
                .filter(move |&pile| {
                    state
                        .center_top(pile)
                        .is_some_and(|top| is_adjacent(card, top))
                })
                .map(move |pile| Action::PlayCard { card: *card, pile })
        })
        .collect();

    if can_pickup_from_kitty(state, player).is_ok() {
        actions.push(Action::Pickup);
    }
    if !seat.requesting_top_up && can_request_top_up(state, player).is_ok() {
        actions.push(Action::RequestTopUp);
    }

    actions
}

/// Apply an action through the transition engine.
pub fn apply_action(
    state: &GameState,
    player: PlayerId,
    action: &Action,
) -> SpeedResult<ActionOutcome> {
    let before = state.move_history.len();
    let next = match action {
        Action::PlayCard { card, pile } => try_play_card(state, player, *card, *pile)?,
        Action::Pickup => try_pickup_from_kitty(state, player)?.0,
        Action::RequestTopUp => try_request_top_up(state, player, true)?.0,
    };
    Ok(ActionOutcome::described(next, before))
}
