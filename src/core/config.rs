//! Session configuration.
//!
//! `GameConfig` fixes everything a session needs before the first deal:
//! seats and names, round count, hand size, show penalty, RNG seed and what
//! happens when a draw hits an empty pile. Build one with `GameConfig::builder`
//! and check it with `validate`; `GameSession::new` refuses invalid configs.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const MAX_ROUNDS: u32 = 20;
pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_SHOW_PENALTY: u32 = 50;

/// What a draw from an empty pile does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustedPilePolicy {
    /// The draw is rejected; the player must take a group or show.
    #[default]
    Reject,
    /// Every discard group except the top one is shuffled into a new pile.
    RecycleDiscards,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in turn order.
    pub players: Vec<String>,

    /// Number of rounds to play.
    pub rounds: u32,

    /// Cards dealt to each player at round start.
    pub hand_size: usize,

    /// Points added to a shower who was not strictly lowest.
    pub show_penalty: u32,

    /// Session seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    pub exhausted_pile: ExhaustedPilePolicy,
}

impl GameConfig {
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the configuration can be played.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let players = self.players.len();
        if players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers {
                min: MIN_PLAYERS,
                actual: players,
            });
        }
        if players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                max: MAX_PLAYERS,
                actual: players,
            });
        }
        if !(1..=MAX_ROUNDS).contains(&self.rounds) {
            return Err(ConfigError::RoundCount {
                max: MAX_ROUNDS,
                actual: self.rounds,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::HandSizeZero);
        }
        if players * self.hand_size >= DECK_SIZE {
            return Err(ConfigError::DeckTooSmall {
                players,
                hand_size: self.hand_size,
            });
        }
        Ok(())
    }
}

/// Builder for `GameConfig`.
///
/// ```
/// use low_points::core::GameConfig;
///
/// let config = GameConfig::builder()
///     .player("Ana")
///     .player("")
///     .rounds(3)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.players, vec!["Ana".to_string(), "Player 2".to_string()]);
/// assert_eq!(config.hand_size, 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    players: Vec<String>,
    rounds: u32,
    hand_size: usize,
    show_penalty: u32,
    seed: Option<u64>,
    exhausted_pile: ExhaustedPilePolicy,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            rounds: 1,
            hand_size: DEFAULT_HAND_SIZE,
            show_penalty: DEFAULT_SHOW_PENALTY,
            seed: None,
            exhausted_pile: ExhaustedPilePolicy::default(),
        }
    }
}

impl GameConfigBuilder {
    /// Add a seat. Blank names become `"Player N"`.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    #[must_use]
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn show_penalty(mut self, penalty: u32) -> Self {
        self.show_penalty = penalty;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn exhausted_pile(mut self, policy: ExhaustedPilePolicy) -> Self {
        self.exhausted_pile = policy;
        self
    }

    /// Fill default names and validate.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let players = self
            .players
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let name = name.trim();
                if name.is_empty() {
                    format!("Player {}", i + 1)
                } else {
                    name.to_string()
                }
            })
            .collect();

        let config = GameConfig {
            players,
            rounds: self.rounds,
            hand_size: self.hand_size,
            show_penalty: self.show_penalty,
            seed: self.seed,
            exhausted_pile: self.exhausted_pile,
        };
        config.validate()?;
        Ok(config)
    }
}
