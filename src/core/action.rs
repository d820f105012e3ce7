//! Turn decisions and the action history.
//!
//! A turn has two decisions:
//! 1. A `TurnAction`: draw from the pile, take the top discard group, or show.
//! 2. Unless the player showed, a `DiscardSelection` of hand indices to eject.
//!
//! Both can be parsed from raw text so a terminal front end only has to
//! relay what was typed; validation against the hand happens in the round.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{DiscardError, Rejection};
use super::player::PlayerId;
use crate::cards::Card;
use crate::zones::DiscardGroup;

/// Which decision the active player owes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Choose a `TurnAction`.
    Act,
    /// Eject one or more equal-rank cards.
    Discard,
    /// Someone showed; no further decisions.
    Finished,
}

/// The first decision of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    DrawPile,
    TakeDiscard,
    Show,
}

impl TurnAction {
    pub const ALL: [TurnAction; 3] = [TurnAction::DrawPile, TurnAction::TakeDiscard, TurnAction::Show];
}

impl FromStr for TurnAction {
    type Err = Rejection;

    /// ```
    /// use low_points::core::TurnAction;
    ///
    /// assert_eq!("p".parse::<TurnAction>(), Ok(TurnAction::DrawPile));
    /// assert_eq!(" D ".parse::<TurnAction>(), Ok(TurnAction::TakeDiscard));
    /// assert_eq!("show".parse::<TurnAction>(), Ok(TurnAction::Show));
    /// assert!("x".parse::<TurnAction>().is_err());
    /// ```
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "p" | "pile" | "draw" => Ok(TurnAction::DrawPile),
            "d" | "discard" | "take" => Ok(TurnAction::TakeDiscard),
            "s" | "show" => Ok(TurnAction::Show),
            _ => Err(Rejection::InvalidActionChoice(raw.trim().to_string())),
        }
    }
}

/// Hand indices chosen for ejection, in the order given.
///
/// Parsing only checks syntax. Range, duplicate and rank checks need the
/// hand and are done by the round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardSelection(pub Vec<usize>);

impl DiscardSelection {
    #[must_use]
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Parse a comma-separated index list such as `"0"` or `"1, 3"`.
    ///
    /// ```
    /// use low_points::core::DiscardSelection;
    ///
    /// assert_eq!(DiscardSelection::parse("1, 3").unwrap().indices(), &[1, 3]);
    /// assert!(DiscardSelection::parse("").is_err());
    /// assert!(DiscardSelection::parse("1,x").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DiscardError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DiscardError::Empty);
        }
        raw.split(',')
            .map(|part| {
                let part = part.trim();
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DiscardError::Malformed(part.to_string()));
                }
                part.parse::<usize>()
                    .map_err(|_| DiscardError::Malformed(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<usize>> for DiscardSelection {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// What an applied decision did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Drew this card from the pile.
    Draw(Card),
    /// Took the whole top discard group.
    Take(DiscardGroup),
    /// Declared show.
    Show,
    /// Show imposed because no draw or take was possible.
    ForcedShow,
    /// Ejected a group onto the discard stack.
    Eject(DiscardGroup),
    /// Buried discard groups were shuffled back into the draw pile.
    Recycle { cards: usize },
}

/// A recorded decision for round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    pub kind: ActionKind,

    /// Turn number within the round (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, kind: ActionKind, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            kind,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_parse_actions() {
        assert_eq!("P".parse::<TurnAction>(), Ok(TurnAction::DrawPile));
        assert_eq!("take".parse::<TurnAction>(), Ok(TurnAction::TakeDiscard));
        assert_eq!("s\n".parse::<TurnAction>(), Ok(TurnAction::Show));
        assert_eq!(
            "quit".parse::<TurnAction>(),
            Err(Rejection::InvalidActionChoice("quit".to_string()))
        );
        assert!("".parse::<TurnAction>().is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(DiscardSelection::parse("0").unwrap(), DiscardSelection::new(vec![0]));
        assert_eq!(DiscardSelection::parse(" 4,2 , 0 ").unwrap().indices(), &[4, 2, 0]);

        // Duplicates are syntactically fine; the round rejects them.
        assert_eq!(DiscardSelection::parse("1,1").unwrap().indices(), &[1, 1]);
    }

    #[test]
    fn test_parse_selection_errors() {
        assert_eq!(DiscardSelection::parse("   "), Err(DiscardError::Empty));
        assert_eq!(DiscardSelection::parse("1,,2"), Err(DiscardError::Malformed(String::new())));
        assert_eq!(DiscardSelection::parse("-1"), Err(DiscardError::Malformed("-1".to_string())));
        assert_eq!(DiscardSelection::parse("a"), Err(DiscardError::Malformed("a".to_string())));
        assert!(matches!(
            DiscardSelection::parse("99999999999999999999999"),
            Err(DiscardError::Malformed(_))
        ));
    }

    #[test]
    fn test_action_record_serialization() {
        let group = DiscardGroup::new(vec![Card::new(Rank::Six, Suit::Hearts)]).unwrap();
        let record = ActionRecord::new(PlayerId::new(1), ActionKind::Eject(group), 2, 1);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
