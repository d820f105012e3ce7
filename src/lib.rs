//! # low-points
//!
//! A turn-based engine for the Low Points card game.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the engine**: Decisions come from a `DecisionProvider`,
//!    state goes out to a `GameObserver`. Terminals, test scripts and network
//!    clients plug in without touching game logic.
//!
//! 2. **Validate, then mutate**: Every rejected decision leaves the round
//!    exactly as it was, and the same player is asked again.
//!
//! 3. **Deterministic when seeded**: One seed reproduces every deal of a
//!    session; each round shuffles from its own forked stream.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, actions, errors
//! - `cards`: Ranks, suits, point values, the 54-card deck
//! - `zones`: Draw pile and discard-group stack
//! - `rules`: Decision provider / observer contract
//! - `games`: The Low Points round engine, scoring and session

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player,
    GameRng,
    GameConfig, GameConfigBuilder, ExhaustedPilePolicy,
    TurnAction, TurnPhase, DiscardSelection, ActionKind, ActionRecord,
    ConfigError, DiscardError, Rejection,
};

pub use crate::cards::{Card, Rank, Suit, build_deck, hand_points};

pub use crate::zones::{DiscardGroup, DiscardStack, DrawPile};

pub use crate::rules::{DecisionProvider, GameObserver, NullObserver, PlayerView, ScriptStep, ScriptedProvider};

pub use crate::games::low_points::{
    GameSession, RoundState, RoundSummary, RoundScore, FinalRanking, SessionObserver, Standing,
    run_round, score_points, score_show,
};
