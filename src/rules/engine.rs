//! The contract between the round engine and whoever supplies decisions.
//!
//! The engine never reads input or prints. It asks a `DecisionProvider` for
//! each decision and pushes state to a `GameObserver`. A terminal front end,
//! a scripted test harness or a network client can sit behind either trait.

use smallvec::SmallVec;

use crate::cards::{hand_points, Card};
use crate::core::{ActionRecord, DiscardSelection, PlayerId, Rejection, TurnAction, TurnPhase};
use crate::zones::DiscardGroup;

/// What the active player can see when asked for a decision.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    /// Round number (starts at 1).
    pub round: u32,

    /// Turn number within the round (starts at 1).
    pub turn: u32,

    /// The player being asked.
    pub player: PlayerId,

    /// Which decision is owed.
    pub phase: TurnPhase,

    /// The player's own hand, in display order.
    pub hand: &'a [Card],

    /// Cards left in the draw pile.
    pub draw_pile_len: usize,

    /// The group that `TakeDiscard` would take.
    pub top_discard: Option<&'a DiscardGroup>,

    /// Whether `DrawPile` would currently succeed.
    pub can_draw: bool,
}

impl PlayerView<'_> {
    /// Actions that would be accepted right now. `Show` is always legal.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[TurnAction; 3]> {
        let mut actions = SmallVec::new();
        if self.can_draw {
            actions.push(TurnAction::DrawPile);
        }
        if self.top_discard.is_some() {
            actions.push(TurnAction::TakeDiscard);
        }
        actions.push(TurnAction::Show);
        actions
    }

    #[must_use]
    pub fn hand_points(&self) -> u32 {
        hand_points(self.hand)
    }
}

/// Supplies decisions for the active player.
///
/// An `Err` (e.g. from parsing raw input) is treated like any other rejected
/// decision: it is reported back and the same decision is requested again.
pub trait DecisionProvider {
    /// Choose draw, take or show.
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Result<TurnAction, Rejection>;

    /// Choose hand indices to eject after a draw or take.
    fn choose_discard(&mut self, view: &PlayerView<'_>) -> Result<DiscardSelection, Rejection>;

    /// A decision from `player` was refused; it will be asked again.
    fn rejected(&mut self, _player: PlayerId, _rejection: &Rejection) {}
}

/// Receives state pushes from the round engine. Every method defaults to a no-op.
///
/// Games that score rounds add their own hooks on top of this trait.
pub trait GameObserver {
    /// A round has been dealt.
    fn round_started(&mut self, _round: u32, _draw_pile_len: usize) {}

    /// About to request a decision described by `view`.
    fn decision_requested(&mut self, _view: &PlayerView<'_>) {}

    /// A decision was refused.
    fn rejected(&mut self, _player: PlayerId, _rejection: &Rejection) {}

    /// A decision was applied.
    fn action_applied(&mut self, _record: &ActionRecord) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
