//! Error types.
//!
//! - `Rejection`: a turn decision the engine refused. Always recoverable: the
//!   same player is asked again and no state has changed.
//! - `DiscardError`: why a discard selection was refused.
//! - `ConfigError`: a session that cannot start.

use thiserror::Error;

use super::action::TurnPhase;

/// Why a discard selection was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiscardError {
    #[error("select at least one card to discard")]
    Empty,
    #[error("indices must be numbers, got {0:?}")]
    Malformed(String),
    #[error("card index {0} selected more than once")]
    Duplicate(usize),
    #[error("card index {index} is out of range for a hand of {hand_len}")]
    OutOfRange { index: usize, hand_len: usize },
    #[error("all discarded cards must have the same rank")]
    MixedRanks,
}

/// A turn decision the engine refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("unrecognized action {0:?}; enter p, d or s")]
    InvalidActionChoice(String),
    #[error("the draw pile is empty")]
    DrawPileEmpty,
    #[error("no discard group is available to take")]
    NoDiscardGroup,
    #[error(transparent)]
    InvalidDiscard(#[from] DiscardError),
    #[error("not accepted during the {actual:?} phase")]
    OutOfPhase { actual: TurnPhase },
}

/// A session configuration that cannot be played.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least {min} players are required, got {actual}")]
    TooFewPlayers { min: usize, actual: usize },
    #[error("at most {max} players are supported, got {actual}")]
    TooManyPlayers { max: usize, actual: usize },
    #[error("round count must be between 1 and {max}, got {actual}")]
    RoundCount { max: u32, actual: u32 },
    #[error("hand size must be at least 1")]
    HandSizeZero,
    #[error("dealing {hand_size} cards to {players} players leaves no draw pile")]
    DeckTooSmall { players: usize, hand_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_error_wraps_into_rejection() {
        let rejection: Rejection = DiscardError::MixedRanks.into();
        assert_eq!(rejection, Rejection::InvalidDiscard(DiscardError::MixedRanks));
        assert_eq!(rejection.to_string(), "all discarded cards must have the same rank");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DiscardError::OutOfRange { index: 7, hand_len: 5 }.to_string(),
            "card index 7 is out of range for a hand of 5"
        );
        assert_eq!(
            ConfigError::TooFewPlayers { min: 2, actual: 1 }.to_string(),
            "at least 2 players are required, got 1"
        );
    }
}
