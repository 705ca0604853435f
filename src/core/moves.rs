//! Move records: the append-only audit trail of a game.
//!
//! Every successful transition appends exactly one `Move`. Records carry ids
//! only; `Move::describe` resolves them against a state for display.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::player::PlayerId;
use super::state::GameState;

/// Kind of transition recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    PlayCard,
    PickupCard,
    RequestTopUp,
    TopUp,
}

/// A recorded transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,

    /// Acting player. `None` for game-wide moves (top-up).
    pub player: Option<PlayerId>,

    /// Card moved, if any.
    pub card: Option<CardId>,

    /// Center pile targeted by a play.
    pub center_pile: Option<usize>,
}

impl Move {
    #[must_use]
    pub fn play(player: PlayerId, card: CardId, center_pile: usize) -> Self {
        Self {
            kind: MoveKind::PlayCard,
            player: Some(player),
            card: Some(card),
            center_pile: Some(center_pile),
        }
    }

    #[must_use]
    pub fn pickup(player: PlayerId, card: CardId) -> Self {
        Self {
            kind: MoveKind::PickupCard,
            player: Some(player),
            card: Some(card),
            center_pile: None,
        }
    }

    #[must_use]
    pub fn request_top_up(player: PlayerId) -> Self {
        Self {
            kind: MoveKind::RequestTopUp,
            player: Some(player),
            card: None,
            center_pile: None,
        }
    }

    #[must_use]
    pub fn top_up() -> Self {
        Self {
            kind: MoveKind::TopUp,
            player: None,
            card: None,
            center_pile: None,
        }
    }

    /// Human-readable line, using player names from `state`.
    ///
    /// Center piles are shown 1-based.
    #[must_use]
    pub fn describe(&self, state: &GameState) -> String {
        let who = self
            .player
            .and_then(|p| state.player(p).ok())
            .map_or_else(|| "Someone".to_string(), |p| p.name.clone());
        let card = self
            .card
            .and_then(|id| Card::from_id(id.0).ok())
            .map_or_else(|| "a card".to_string(), |c| c.to_string());

        match self.kind {
            MoveKind::PlayCard => match self.center_pile {
                Some(pile) => format!("{who} played {card} onto pile {}", pile + 1),
                None => format!("{who} played {card}"),
            },
            MoveKind::PickupCard => format!("{who} picked up {card}"),
            MoveKind::RequestTopUp => format!("{who} requested a top-up"),
            MoveKind::TopUp => "Center piles topped up".to_string(),
        }
    }
}
