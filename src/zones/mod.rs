//! Shared card zones for a round.
//!
//! ## Key Types
//!
//! - `DrawPile`: Face-down remaining deck, drawn from the top
//! - `DiscardGroup`: One turn's ejected equal-rank cards
//! - `DiscardStack`: LIFO stack of discard groups
//!
//! Hands are per-player and live in the round state.

pub mod discard;
pub mod draw_pile;

pub use discard::{DiscardGroup, DiscardStack};
pub use draw_pile::DrawPile;
