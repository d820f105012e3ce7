//! Round engine tests.
//!
//! These tests drive whole rounds through the public API and check the
//! card-conservation and validate-before-mutate guarantees.

use low_points::cards::{Card, Rank, DECK_SIZE};
use low_points::core::{
    ActionKind, DiscardError, DiscardSelection, ExhaustedPilePolicy, GameConfig, GameRng, PlayerId, Rejection,
    TurnAction, TurnPhase,
};
use low_points::games::low_points::{run_round, validate_discard, RoundState};
use low_points::rules::{DecisionProvider, NullObserver, PlayerView};
use proptest::prelude::*;

fn config(players: usize, policy: ExhaustedPilePolicy) -> GameConfig {
    GameConfig::builder()
        .players((0..players).map(|i| format!("P{}", i + 1)))
        .exhausted_pile(policy)
        .build()
        .unwrap()
}

/// Indices of the largest same-rank group in `hand`.
fn biggest_group(hand: &[Card]) -> Vec<usize> {
    let mut best: Vec<usize> = vec![0];
    for card in hand {
        let group: Vec<usize> = hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.rank == card.rank)
            .map(|(j, _)| j)
            .collect();
        if group.len() > best.len() {
            best = group;
        }
    }
    best
}

/// Plays a fixed number of turns, alternating draw and take, then shows.
struct TurnLimited {
    turns_left: u32,
    take_next: bool,
}

impl DecisionProvider for TurnLimited {
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Result<TurnAction, Rejection> {
        if self.turns_left == 0 {
            return Ok(TurnAction::Show);
        }
        self.turns_left -= 1;
        self.take_next = !self.take_next;
        let legal = view.legal_actions();
        if self.take_next && legal.contains(&TurnAction::TakeDiscard) {
            Ok(TurnAction::TakeDiscard)
        } else if legal.contains(&TurnAction::DrawPile) {
            Ok(TurnAction::DrawPile)
        } else {
            Ok(legal[0])
        }
    }

    fn choose_discard(&mut self, view: &PlayerView<'_>) -> Result<DiscardSelection, Rejection> {
        Ok(DiscardSelection::new(biggest_group(view.hand)))
    }
}

/// Test that a dealt round starts with 5 cards per hand for every table size.
#[test]
fn test_deal_all_table_sizes() {
    for players in 2..=8 {
        let state = RoundState::deal(1, &config(players, ExhaustedPilePolicy::Reject), GameRng::new(42));

        for player in PlayerId::all(players) {
            assert_eq!(state.hand(player).len(), 5);
        }
        assert_eq!(state.draw_pile().len(), DECK_SIZE - 5 * players);
        assert_eq!(state.card_count(), DECK_SIZE);
    }
}

/// Test that a long round conserves cards at every step, stepping manually.
#[test]
fn test_conservation_step_by_step() {
    let mut state = RoundState::deal(1, &config(4, ExhaustedPilePolicy::Reject), GameRng::new(7));
    let mut provider = TurnLimited {
        turns_left: 200,
        take_next: false,
    };

    while state.phase() != TurnPhase::Finished {
        if state.force_show_if_stuck() {
            break;
        }
        match state.phase() {
            TurnPhase::Act => {
                let action = provider.choose_action(&state.view()).unwrap();
                state.apply_action(action).unwrap();
            }
            TurnPhase::Discard => {
                let selection = provider.choose_discard(&state.view()).unwrap();
                state.apply_discard(&selection).unwrap();
            }
            TurnPhase::Finished => unreachable!(),
        }
        assert_eq!(state.card_count(), DECK_SIZE);
    }

    assert!(state.shower().is_some());
}

/// Test that a drawn-out round with recycling never loses or duplicates cards.
#[test]
fn test_recycling_round_conserves_cards() {
    let mut state = RoundState::deal(1, &config(2, ExhaustedPilePolicy::RecycleDiscards), GameRng::new(3));
    let mut provider = TurnLimited {
        turns_left: 400,
        take_next: true,
    };

    run_round(&mut state, &mut provider, &mut NullObserver);

    assert_eq!(state.card_count(), DECK_SIZE);
    let mut all: Vec<Card> = state.draw_pile().cards().to_vec();
    for player in PlayerId::all(2) {
        all.extend_from_slice(state.hand(player));
    }
    for group in state.discards().groups() {
        all.extend_from_slice(group.cards());
    }
    assert_eq!(all.iter().filter(|c| c.rank == Rank::Wildcard).count(), 2);
    assert_eq!(all.iter().filter(|c| c.rank == Rank::King).count(), 4);
}

/// Test that mixed-rank selections are always refused without touching the hand.
#[test]
fn test_mixed_rank_selection_never_mutates() {
    let mut state = RoundState::deal(1, &config(3, ExhaustedPilePolicy::Reject), GameRng::new(99));
    state.apply_action(TurnAction::DrawPile).unwrap();

    let hand = state.hand(PlayerId::new(0)).to_vec();
    for i in 0..hand.len() {
        for j in 0..hand.len() {
            if hand[i].rank == hand[j].rank {
                continue;
            }
            let result = state.apply_discard(&DiscardSelection::new(vec![i, j]));
            assert_eq!(result.unwrap_err(), Rejection::InvalidDiscard(DiscardError::MixedRanks));
            assert_eq!(state.hand(PlayerId::new(0)), &hand[..]);
            assert!(state.discards().is_empty());
        }
    }
}

/// Test that taking a group moves every card of it and removes it from the stack.
#[test]
fn test_take_is_atomic() {
    let mut state = RoundState::deal(1, &config(2, ExhaustedPilePolicy::Reject), GameRng::new(5));

    // Seat 0 draws and ejects its biggest group.
    state.apply_action(TurnAction::DrawPile).unwrap();
    let selection = DiscardSelection::new(biggest_group(state.hand(PlayerId::new(0))));
    let ejected = state.apply_discard(&selection).unwrap();

    let before = state.hand(PlayerId::new(1)).len();
    let ActionKind::Take(taken) = state.apply_action(TurnAction::TakeDiscard).unwrap() else {
        panic!("take should report the group");
    };

    assert_eq!(taken, ejected);
    assert_eq!(state.hand(PlayerId::new(1)).len(), before + ejected.len());
    assert!(state.discards().is_empty());
    for card in ejected.cards() {
        assert!(state.hand(PlayerId::new(1)).contains(card));
    }
}

/// Test that showing is legal on the very first decision.
#[test]
fn test_first_player_may_show() {
    let mut state = RoundState::deal(1, &config(5, ExhaustedPilePolicy::Reject), GameRng::new(1));

    assert_eq!(state.apply_action(TurnAction::Show), Ok(ActionKind::Show));
    assert_eq!(state.shower(), Some(PlayerId::new(0)));
    assert_eq!(state.card_count(), DECK_SIZE);
}

proptest! {
    /// Cards are conserved for any seed, table size and round length.
    #[test]
    fn prop_round_conserves_cards(
        seed in any::<u64>(),
        players in 2usize..=8,
        turns in 0u32..150,
        recycle in any::<bool>(),
    ) {
        let policy = if recycle {
            ExhaustedPilePolicy::RecycleDiscards
        } else {
            ExhaustedPilePolicy::Reject
        };
        let mut state = RoundState::deal(1, &config(players, policy), GameRng::new(seed));
        let mut provider = TurnLimited { turns_left: turns, take_next: false };

        let shower = run_round(&mut state, &mut provider, &mut NullObserver);

        prop_assert_eq!(state.card_count(), DECK_SIZE);
        prop_assert_eq!(state.shower(), Some(shower));
        prop_assert!(state.discards().groups().iter().all(|g| !g.is_empty()));
    }

    /// Validation agrees with a direct reading of the rules.
    #[test]
    fn prop_validate_discard_matches_rules(
        seed in any::<u64>(),
        indices in proptest::collection::vec(0usize..8, 0..5),
    ) {
        let state = RoundState::deal(1, &config(2, ExhaustedPilePolicy::Reject), GameRng::new(seed));
        let hand = state.hand(PlayerId::new(0));

        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let expected_ok = !indices.is_empty()
            && sorted.len() == indices.len()
            && indices.iter().all(|&i| i < hand.len())
            && indices.iter().all(|&i| hand[i].rank == hand[indices[0]].rank);

        prop_assert_eq!(validate_discard(hand, &indices).is_ok(), expected_ok);
    }
}
