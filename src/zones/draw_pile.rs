//! The face-down draw pile.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Face-down pile of undealt cards. The top of the pile is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Wrap an already-shuffled sequence.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove up to `count` cards from the top, in draw order.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            match self.cards.pop() {
                Some(card) => dealt.push(card),
                None => break,
            }
        }
        dealt
    }

    /// Add recycled cards underneath and reshuffle the whole pile.
    pub fn refill(&mut self, cards: impl IntoIterator<Item = Card>, rng: &mut GameRng) {
        self.cards.extend(cards);
        rng.shuffle(&mut self.cards);
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
