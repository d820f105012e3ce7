//! Card system: ranks, suits, point values and the 54-card deck.
//!
//! ## Key Types
//!
//! - `Rank`: A through K plus the suitless `Wildcard`
//! - `Suit`: The four suits
//! - `Card`: Immutable rank + optional suit, with a point value
//!
//! ## Points
//!
//! A = 1, 2-10 = face value, J/Q/K = 10, wildcard = 0.

pub mod card;
pub mod deck;

pub use card::{hand_points, render_cards, sort_for_reveal, Card, Rank, Suit};
pub use deck::{build_deck, shuffled_deck, standard_deck, DECK_SIZE, WILDCARDS};
