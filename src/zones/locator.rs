//! Zone lookup and the card conservation audit.
//!
//! Lookup is a linear scan across every zone. With at most 52 cards this is
//! cheap enough that no id-to-zone index is maintained.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, GameState, PlayerId, DECK_SIZE};
use crate::error::{SpeedError, SpeedResult};

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand(PlayerId),
    Kitty(PlayerId),
    TopUp(PlayerId),
    Center(usize),
    Discarded,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Hand(p) => write!(f, "{p} hand"),
            Zone::Kitty(p) => write!(f, "{p} kitty"),
            Zone::TopUp(p) => write!(f, "{p} top-up pile"),
            Zone::Center(i) => write!(f, "center pile {i}"),
            Zone::Discarded => write!(f, "discard"),
        }
    }
}

/// Every (zone, card) pair in the state, in a fixed scan order.
fn zone_cards(state: &GameState) -> impl Iterator<Item = (Zone, &Card)> {
    let players = state.iter_players().flat_map(|(id, p)| {
        p.hand
            .iter()
            .map(move |c| (Zone::Hand(id), c))
            .chain(p.kitty.iter().map(move |c| (Zone::Kitty(id), c)))
            .chain(p.top_up.iter().map(move |c| (Zone::TopUp(id), c)))
    });
    let centers = state
        .center_piles
        .iter()
        .enumerate()
        .flat_map(|(i, pile)| pile.cards.iter().map(move |c| (Zone::Center(i), c)));
    let discarded = state.discarded.iter().map(|c| (Zone::Discarded, c));

    players.chain(centers).chain(discarded)
}

/// Find the zone holding a card.
#[must_use]
pub fn locate(state: &GameState, card: CardId) -> Option<Zone> {
    zone_cards(state)
        .find(|(_, c)| c.id == card)
        .map(|(zone, _)| zone)
}

/// Check that every card id 0..52 appears exactly once across all zones.
pub fn audit_conservation(state: &GameState) -> SpeedResult<()> {
    let mut seen = FxHashSet::default();

    for (zone, card) in zone_cards(state) {
        if card.id.0 >= DECK_SIZE {
            return Err(SpeedError::Conservation(format!(
                "unknown card id {} in {zone}",
                card.id.0
            )));
        }
        if !seen.insert(card.id) {
            return Err(SpeedError::Conservation(format!(
                "{card} duplicated (seen again in {zone})"
            )));
        }
    }

    if seen.len() != DECK_SIZE as usize {
        let missing: Vec<u8> = (0..DECK_SIZE)
            .filter(|id| !seen.contains(&CardId(*id)))
            .collect();
        return Err(SpeedError::Conservation(format!("missing card ids {missing:?}")));
    }

    Ok(())
}
