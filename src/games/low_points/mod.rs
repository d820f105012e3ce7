//! Low Points: a shedding game where the lowest hand total wins.
//!
//! - Each player is dealt 5 cards; the rest form a face-down draw pile
//! - On your turn: draw from the pile OR take the whole top discard group,
//!   then eject one or more cards of a single rank as a new group
//! - Instead of drawing you may call "show", which ends the round at once
//! - The show is scored (see `scoring`) and points accumulate over rounds;
//!   the lowest total after the last round wins
//!
//! Supports 2-8 players.

mod round;
mod scoring;
mod session;

pub use round::{run_round, validate_discard, RoundState};
pub use scoring::{score_points, score_show, RoundScore};
pub use session::{FinalRanking, GameSession, RoundSummary, SessionObserver, Standing};
