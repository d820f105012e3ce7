//! Deck construction.
//!
//! A deck is the 52 suited cards plus two wildcards. Decks are dealt and
//! drawn from the end of the vector.

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 54;

/// Number of wildcards in a full deck.
pub const WILDCARDS: usize = 2;

/// Unshuffled deck: every rank of every suit, then the wildcards.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::STANDARD {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck.extend(std::iter::repeat(Card::wildcard()).take(WILDCARDS));
    deck
}

/// A full deck shuffled with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// A full deck shuffled from `seed`, or from entropy when `None`.
///
/// ```
/// use low_points::cards::build_deck;
///
/// assert_eq!(build_deck(Some(9)), build_deck(Some(9)));
/// assert_eq!(build_deck(None).len(), 54);
/// ```
#[must_use]
pub fn build_deck(seed: Option<u64>) -> Vec<Card> {
    shuffled_deck(&mut GameRng::from_optional_seed(seed))
}
