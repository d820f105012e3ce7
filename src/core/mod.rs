//! Core engine types: players, RNG, configuration, actions and errors.
//!
//! These are shared by the zones, the collaborator contract in `rules` and
//! the round/session logic in `games::low_points`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{ExhaustedPilePolicy, GameConfig, GameConfigBuilder};
pub use action::{ActionKind, ActionRecord, DiscardSelection, TurnAction, TurnPhase};
pub use error::{ConfigError, DiscardError, Rejection};
