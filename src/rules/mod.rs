//! Speed rules: validation, transitions, and caller-facing actions.
//!
//! - `validator`: pure predicates (adjacency, available plays, pickup,
//!   top-up eligibility, winner)
//! - `engine`: the transitions that derive a new `GameState`
//! - `action`: `Action` values for hosts that dispatch player input

pub mod action;
pub mod engine;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{apply_action, legal_actions, Action, ActionOutcome};
pub use engine::{
    replenish_top_up_cards, try_pickup_from_kitty, try_play_card, try_request_top_up, try_top_up,
};
pub use validator::{
    can_pickup_from_kitty, can_request_top_up, card_has_play, is_adjacent, player_has_play,
    try_get_winner,
};
