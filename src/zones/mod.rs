//! Card locations.
//!
//! Each of the 52 cards sits in exactly one zone at a time. Zones are fixed
//! by the game: per-player hand, kitty and top-up pile, the two shared
//! center piles, and the out-of-play discard.
//!
//! ## Key Types
//!
//! - `Zone`: where a card currently sits
//! - `locate`: linear scan from card id to zone
//! - `audit_conservation`: every card present exactly once

pub mod locator;

pub use locator::{audit_conservation, locate, Zone};
