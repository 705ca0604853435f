//! Headless bot-vs-bot playout.
//!
//! Seats alternate, one `bot_move` each, until someone wins or the step cap
//! is reached. Useful for soak tests and for checking seeded games replay
//! identically.

use tracing::debug;

use crate::core::{GameState, PlayerId, PLAYER_COUNT};
use crate::error::SpeedResult;
use crate::rules::try_get_winner;

use super::policy::bot_move;

/// Result of a playout.
#[derive(Clone, Debug)]
pub struct Playout {
    pub state: GameState,
    pub winner: Option<PlayerId>,

    /// Bot calls made, passes included.
    pub steps: usize,

    /// Descriptions of every non-pass move, in order.
    pub log: Vec<String>,
}

/// Alternate both seats through the bot policy.
pub fn play_out(state: &GameState, max_steps: usize) -> SpeedResult<Playout> {
    let mut current = state.clone();
    let mut log = Vec::new();
    let mut steps = 0;

    while steps < max_steps {
        if try_get_winner(&current).is_ok() {
            break;
        }
        let seat = PlayerId::new((steps % PLAYER_COUNT) as u8);
        let (next, description) = bot_move(&current, seat)?;
        if !description.is_empty() {
            log.push(description);
        }
        current = next;
        steps += 1;
    }

    let winner = try_get_winner(&current).ok();
    debug!(steps, ?winner, moves = current.move_history.len(), "playout finished");

    Ok(Playout {
        state: current,
        winner,
        steps,
        log,
    })
}
