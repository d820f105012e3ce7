//! Playing cards and their point values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rank. `Wildcard` is the suitless joker worth zero points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Wildcard,
}

impl Rank {
    /// The thirteen suited ranks, ace low.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value of a card of this rank.
    ///
    /// ```
    /// use low_points::cards::Rank;
    ///
    /// assert_eq!(Rank::Ace.points(), 1);
    /// assert_eq!(Rank::Seven.points(), 7);
    /// assert_eq!(Rank::Queen.points(), 10);
    /// assert_eq!(Rank::Wildcard.points(), 0);
    /// ```
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Wildcard => 0,
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Wildcard => "JOKER",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol == Rank::Wildcard.symbol() {
            return Some(Rank::Wildcard);
        }
        Rank::STANDARD.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|suit| suit.to_char() == ch)
    }
}

/// An immutable playing card.
///
/// Wildcards carry no suit. Two cards with the same rank and suit are
/// interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    #[must_use]
    pub const fn wildcard() -> Self {
        Self {
            rank: Rank::Wildcard,
            suit: None,
        }
    }

    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self.rank, Rank::Wildcard)
    }

    /// Point value; wildcards are worth 0 whatever their suit.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.rank.points()
    }

    /// Short text code: `"10H"`, `"KS"`, `"JOKER"`.
    #[must_use]
    pub fn code(&self) -> String {
        match self.suit {
            Some(suit) if !self.is_wildcard() => format!("{}{}", self.rank.symbol(), suit.to_char()),
            _ => self.rank.symbol().to_string(),
        }
    }

    /// Parse a code produced by [`Card::code`].
    ///
    /// ```
    /// use low_points::cards::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_code("10H"), Some(Card::new(Rank::Ten, Suit::Hearts)));
    /// assert_eq!(Card::from_code("JOKER"), Some(Card::wildcard()));
    /// assert_eq!(Card::from_code("1X"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        if code == Rank::Wildcard.symbol() {
            return Some(Card::wildcard());
        }
        let suit_char = code.chars().last()?;
        let suit = Suit::from_char(suit_char)?;
        let rank = Rank::from_symbol(&code[..code.len() - suit_char.len_utf8()])?;
        if rank == Rank::Wildcard {
            return None;
        }
        Some(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Sum of card points.
#[must_use]
pub fn hand_points(cards: &[Card]) -> u32 {
    cards.iter().map(Card::points).sum()
}

/// Space-separated card codes, for logs and displays.
#[must_use]
pub fn render_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::code).collect::<Vec<_>>().join(" ")
}

/// Order a revealed hand by points, then rank, then suit.
pub fn sort_for_reveal(cards: &mut [Card]) {
    cards.sort_by_key(|card| (card.points(), card.rank, card.suit));
}
