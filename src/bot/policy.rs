//! Fixed-priority bot policy.
//!
//! Priority, highest first:
//! 1. Play the first playable hand card onto its first matching pile
//! 2. Pick up from the kitty
//! 3. Request a top-up (tops up at once if the opponent is already waiting)
//! 4. Pass
//!
//! Passing is not an error: a stuck bot waiting on its opponent simply
//! returns the state unchanged with an empty description.

use tracing::trace;

use crate::core::{GameState, PlayerId};
use crate::error::SpeedResult;
use crate::rules::{apply_action, can_pickup_from_kitty, player_has_play, Action};

/// What the bot wants to do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotDecision {
    Act(Action),
    Pass,
}

/// Choose the next action for a seat without applying it.
pub fn decide(state: &GameState, player: PlayerId) -> SpeedResult<BotDecision> {
    let seat = state.player(player)?;

    match player_has_play(state, player) {
        Ok((card, pile)) => return Ok(BotDecision::Act(Action::PlayCard { card, pile })),
        Err(reason) => trace!(%player, %reason, "bot cannot play"),
    }
    match can_pickup_from_kitty(state, player) {
        Ok(()) => return Ok(BotDecision::Act(Action::Pickup)),
        Err(reason) => trace!(%player, %reason, "bot cannot pick up"),
    }
    if !seat.requesting_top_up {
        return Ok(BotDecision::Act(Action::RequestTopUp));
    }

    Ok(BotDecision::Pass)
}

/// Decide and apply the bot's next move.
///
/// Returns the new state and a description of what happened; a pass returns
/// the input state and an empty description.
pub fn bot_move(state: &GameState, player: PlayerId) -> SpeedResult<(GameState, String)> {
    match decide(state, player)? {
        BotDecision::Act(action) => {
            let outcome = apply_action(state, player, &action)?;
            Ok((outcome.state, outcome.description))
        }
        BotDecision::Pass => Ok((state.clone(), String::new())),
    }
}
