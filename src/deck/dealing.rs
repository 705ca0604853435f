//! Dealing implementation.

use tracing::debug;

use crate::core::{
    full_deck, Card, GameRng, GameState, Settings, CENTER_PILE_COUNT, DECK_SIZE, PLAYER_COUNT,
    STARTING_HAND,
};
use crate::error::{SpeedError, SpeedResult};

/// Cards dealt into each kitty.
pub const KITTY_SIZE: usize = 15;

/// Cards dealt into each top-up pile.
pub const TOP_UP_SIZE: usize = 5;

const DEFAULT_NAMES: [&str; PLAYER_COUNT] = ["Player 1", "Player 2"];

/// Build the 52-card deck and shuffle it with the settings' seed.
#[must_use]
pub fn shuffled_deck(settings: &Settings) -> Vec<Card> {
    let mut deck: Vec<Card> = full_deck().collect();
    GameRng::for_seed(settings.random_seed).shuffle(&mut deck);
    deck
}

/// Builder for the opening `GameState`.
///
/// ```
/// use speed_engine::deck::GameBuilder;
/// use speed_engine::core::Settings;
///
/// let state = GameBuilder::new()
///     .player_names("Alice", "Bob")
///     .settings(Settings::default().with_seed(7))
///     .build()
///     .unwrap();
///
/// assert_eq!(state.players[0].hand.len(), 5);
/// assert_eq!(state.players[1].kitty.len(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: [String; PLAYER_COUNT],
    settings: Settings,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.map(String::from),
            settings: Settings::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Shuffle and deal.
    ///
    /// Cards are popped from the end of the shuffled deck: hands first, then
    /// kitties, then top-up piles, then one starter per center pile.
    pub fn build(self) -> SpeedResult<GameState> {
        self.settings.validate()?;

        let dealt = PLAYER_COUNT * (STARTING_HAND + KITTY_SIZE + TOP_UP_SIZE) + CENTER_PILE_COUNT;
        if dealt != DECK_SIZE as usize {
            return Err(SpeedError::InvalidSettings(format!(
                "deal uses {dealt} cards, deck has {DECK_SIZE}"
            )));
        }

        let mut deck = shuffled_deck(&self.settings);
        let mut state = GameState::new(self.names, self.settings);
        let mut next = || {
            deck.pop()
                .ok_or_else(|| SpeedError::InvalidSettings("deck exhausted while dealing".into()))
        };

        for player in state.players.iter_mut() {
            for _ in 0..STARTING_HAND {
                player.hand.push_back(next()?);
            }
        }
        for player in state.players.iter_mut() {
            for _ in 0..KITTY_SIZE {
                player.kitty.push_back(next()?);
            }
        }
        for player in state.players.iter_mut() {
            for _ in 0..TOP_UP_SIZE {
                player.top_up.push_back(next()?);
            }
        }
        for pile in state.center_piles.iter_mut() {
            pile.push(next()?);
        }

        debug!(
            seed = ?state.settings.random_seed,
            first = ?state.center_top(0).map(Card::short_name),
            second = ?state.center_top(1).map(Card::short_name),
            "dealt new game"
        );

        Ok(state)
    }
}

/// Deal a new game, optionally naming the two seats.
pub fn new_game(names: Option<[&str; PLAYER_COUNT]>, settings: Settings) -> SpeedResult<GameState> {
    let builder = GameBuilder::new().settings(settings);
    match names {
        Some([first, second]) => builder.player_names(first, second).build(),
        None => builder.build(),
    }
}
