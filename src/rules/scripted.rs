//! Scripted decision provider for tests and replays.

use std::collections::VecDeque;

use log::debug;

use super::engine::{DecisionProvider, PlayerView};
use crate::core::{DiscardSelection, PlayerId, Rejection, TurnAction};

/// One scripted answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    Action(TurnAction),
    /// Raw text, parsed like terminal input.
    RawAction(String),
    Discard(Vec<usize>),
    /// Raw text, parsed like terminal input.
    RawDiscard(String),
}

/// Answers decisions from a queue shared by all seats, in turn order.
///
/// Steps are consumed front to back. If the next step is of the wrong kind,
/// or the queue is empty, the provider falls back without consuming it: an
/// action request shows and a discard request ejects the first card.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    steps: VecDeque<ScriptStep>,
    rejections: Vec<(PlayerId, Rejection)>,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Append an action step.
    #[must_use]
    pub fn then_act(mut self, action: TurnAction) -> Self {
        self.steps.push_back(ScriptStep::Action(action));
        self
    }

    /// Append a discard step.
    #[must_use]
    pub fn then_discard(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.steps.push_back(ScriptStep::Discard(indices.into()));
        self
    }

    /// Append a raw action step.
    #[must_use]
    pub fn then_type_action(mut self, raw: impl Into<String>) -> Self {
        self.steps.push_back(ScriptStep::RawAction(raw.into()));
        self
    }

    /// Append a raw discard step.
    #[must_use]
    pub fn then_type_discard(mut self, raw: impl Into<String>) -> Self {
        self.steps.push_back(ScriptStep::RawDiscard(raw.into()));
        self
    }

    /// Steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Every rejection reported so far, in order.
    #[must_use]
    pub fn rejections(&self) -> &[(PlayerId, Rejection)] {
        &self.rejections
    }
}

impl DecisionProvider for ScriptedProvider {
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Result<TurnAction, Rejection> {
        match self.steps.front() {
            Some(ScriptStep::Action(_) | ScriptStep::RawAction(_)) => {}
            _ => {
                debug!("script has no action for {}; showing", view.player);
                return Ok(TurnAction::Show);
            }
        }
        match self.steps.pop_front() {
            Some(ScriptStep::Action(action)) => Ok(action),
            Some(ScriptStep::RawAction(raw)) => raw.parse(),
            _ => Ok(TurnAction::Show),
        }
    }

    fn choose_discard(&mut self, view: &PlayerView<'_>) -> Result<DiscardSelection, Rejection> {
        match self.steps.front() {
            Some(ScriptStep::Discard(_) | ScriptStep::RawDiscard(_)) => {}
            _ => {
                debug!("script has no discard for {}; ejecting first card", view.player);
                return Ok(DiscardSelection::new(vec![0]));
            }
        }
        match self.steps.pop_front() {
            Some(ScriptStep::Discard(indices)) => Ok(DiscardSelection::new(indices)),
            Some(ScriptStep::RawDiscard(raw)) => Ok(DiscardSelection::parse(&raw)?),
            _ => Ok(DiscardSelection::new(vec![0])),
        }
    }

    fn rejected(&mut self, player: PlayerId, rejection: &Rejection) {
        self.rejections.push((player, rejection.clone()));
    }
}
