//! Discard groups and the stack they are ejected onto.
//!
//! Each turn's ejection forms one group of equal-rank cards. Groups stack;
//! only the top group can be taken back, and it is always taken whole.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};

/// One turn's ejected cards, all of one rank.
///
/// A rank has at most four copies in the deck, so groups never spill
/// onto the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardGroup {
    rank: Rank,
    cards: SmallVec<[Card; 4]>,
}

impl DiscardGroup {
    /// Build a group. Returns `None` if `cards` is empty or mixes ranks.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Option<Self> {
        let cards: SmallVec<[Card; 4]> = cards.into_iter().collect();
        let rank = cards.first()?.rank;
        if cards.iter().any(|card| card.rank != rank) {
            return None;
        }
        Some(Self { rank, cards })
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the group holds no cards. A constructed group never does.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        crate::cards::hand_points(&self.cards)
    }

    pub fn into_cards(self) -> SmallVec<[Card; 4]> {
        self.cards
    }
}

impl std::fmt::Display for DiscardGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::cards::render_cards(&self.cards))
    }
}

/// Last-in-first-out stack of discard groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardStack {
    groups: Vec<DiscardGroup>,
}

impl DiscardStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: DiscardGroup) {
        self.groups.push(group);
    }

    /// Remove the whole top group.
    pub fn pop(&mut self) -> Option<DiscardGroup> {
        self.groups.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&DiscardGroup> {
        self.groups.last()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of cards across all groups.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(DiscardGroup::len).sum()
    }

    /// Groups bottom to top.
    #[must_use]
    pub fn groups(&self) -> &[DiscardGroup] {
        &self.groups
    }

    /// Remove every group except the top one and return their cards.
    pub fn take_buried(&mut self) -> Vec<Card> {
        let Some(top) = self.groups.pop() else {
            return Vec::new();
        };
        let buried = self
            .groups
            .drain(..)
            .flat_map(DiscardGroup::into_cards)
            .collect();
        self.groups.push(top);
        buried
    }
}
