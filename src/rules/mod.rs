//! Collaborator contract for front ends.
//!
//! Front ends implement `DecisionProvider` to answer decisions and
//! `GameObserver` to display state. The engine validates every answer and
//! re-asks on rejection, so providers only relay input.

pub mod engine;
pub mod scripted;

pub use engine::{DecisionProvider, GameObserver, NullObserver, PlayerView};
pub use scripted::{ScriptStep, ScriptedProvider};
