//! Show scoring.
//!
//! When a player shows, every hand is revealed and totalled:
//!
//! - If the shower's total is strictly below every other player's, the
//!   shower scores 0 and everyone else scores their full hand total.
//! - Otherwise the shower takes the flat show penalty. Other players whose
//!   total is at or below the shower's score 0; the rest score their total.
//!
//! Lower is better, so "scoring" here always means adding points.

use serde::{Deserialize, Serialize};

use crate::cards::{hand_points, Card};
use crate::core::{PlayerId, PlayerMap};

/// Per-player outcome of one show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub shower: PlayerId,

    /// Whether the shower beat every other hand outright.
    pub strictly_lowest: bool,

    /// Points in each final hand.
    pub hand_points: PlayerMap<u32>,

    /// Points added to each player's total for the round.
    pub additions: PlayerMap<u32>,
}

/// Score a show from per-player hand totals.
///
/// ```
/// use low_points::core::{PlayerId, PlayerMap};
/// use low_points::games::low_points::score_points;
///
/// let points = PlayerMap::from_vec(vec![5, 8, 12]);
/// let score = score_points(&points, PlayerId::new(0), 50);
///
/// assert!(score.strictly_lowest);
/// assert_eq!(score.additions, PlayerMap::from_vec(vec![0, 8, 12]));
/// ```
#[must_use]
pub fn score_points(hand_points: &PlayerMap<u32>, shower: PlayerId, show_penalty: u32) -> RoundScore {
    let shower_points = hand_points[shower];
    let strictly_lowest = hand_points
        .iter()
        .filter(|&(p, _)| p != shower)
        .all(|(_, &points)| shower_points < points);

    let additions = hand_points.map(|player, &points| {
        if player == shower {
            if strictly_lowest {
                0
            } else {
                show_penalty
            }
        } else if strictly_lowest || points > shower_points {
            points
        } else {
            0
        }
    });

    RoundScore {
        shower,
        strictly_lowest,
        hand_points: hand_points.clone(),
        additions,
    }
}

/// Score a show from the final hands.
#[must_use]
pub fn score_show(hands: &PlayerMap<Vec<Card>>, shower: PlayerId, show_penalty: u32) -> RoundScore {
    score_points(&hands.map(|_, hand| hand_points(hand)), shower, show_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn score(points: &[u32], shower: u8) -> RoundScore {
        score_points(&PlayerMap::from_vec(points.to_vec()), PlayerId::new(shower), 50)
    }

    fn additions(score: &RoundScore) -> Vec<u32> {
        score.additions.values().copied().collect()
    }

    #[test]
    fn test_strictly_lowest_shower() {
        let result = score(&[5, 8, 12], 0);

        assert!(result.strictly_lowest);
        assert_eq!(additions(&result), vec![0, 8, 12]);
    }

    #[test]
    fn test_tie_with_shower_is_penalized() {
        let result = score(&[10, 10, 15], 0);

        assert!(!result.strictly_lowest);
        assert_eq!(additions(&result), vec![50, 0, 15]);
    }

    #[test]
    fn test_highest_shower_still_penalized() {
        let result = score(&[20, 5, 3], 0);

        assert!(!result.strictly_lowest);
        assert_eq!(additions(&result), vec![50, 0, 0]);
    }

    #[test]
    fn test_shower_in_middle_seat() {
        let result = score(&[30, 2, 9, 2], 1);

        assert!(!result.strictly_lowest);
        assert_eq!(additions(&result), vec![30, 50, 9, 0]);
    }

    #[test]
    fn test_zero_point_shower() {
        let result = score(&[1, 0], 1);

        assert!(result.strictly_lowest);
        assert_eq!(additions(&result), vec![1, 0]);
    }

    #[test]
    fn test_custom_penalty() {
        let result = score_points(&PlayerMap::from_vec(vec![7, 7]), PlayerId::new(1), 25);
        assert_eq!(additions(&result), vec![0, 25]);
    }

    #[test]
    fn test_score_show_from_hands() {
        let hands = PlayerMap::from_vec(vec![
            vec![Card::new(Rank::King, Suit::Hearts), Card::new(Rank::Three, Suit::Clubs)],
            vec![Card::wildcard(), Card::new(Rank::Ace, Suit::Spades)],
        ]);

        let result = score_show(&hands, PlayerId::new(1), 50);

        assert_eq!(result.hand_points, PlayerMap::from_vec(vec![13, 1]));
        assert!(result.strictly_lowest);
        assert_eq!(additions(&result), vec![13, 0]);
    }

    #[test]
    fn test_scoring_is_pure() {
        let points = PlayerMap::from_vec(vec![4, 9, 4]);
        let first = score_points(&points, PlayerId::new(2), 50);
        let second = score_points(&points, PlayerId::new(2), 50);
        assert_eq!(first, second);
    }
}
