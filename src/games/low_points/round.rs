//! One round: deal, turn loop, show.
//!
//! `RoundState` holds every card of the round in exactly one place: the draw
//! pile, one player's hand or one discard group. Its transitions validate
//! before they mutate, so a rejected decision leaves the state untouched.
//!
//! `run_round` drives a `RoundState` to completion against a
//! `DecisionProvider`, re-asking after every rejection.

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::cards::{render_cards, shuffled_deck, Card};
use crate::core::{
    ActionKind, ActionRecord, DiscardError, DiscardSelection, ExhaustedPilePolicy, GameConfig, GameRng,
    PlayerId, PlayerMap, Rejection, TurnAction, TurnPhase,
};
use crate::rules::{DecisionProvider, GameObserver, PlayerView};
use crate::zones::{DiscardGroup, DiscardStack, DrawPile};

/// State of a round in progress.
#[derive(Clone, Debug)]
pub struct RoundState {
    round_number: u32,
    exhausted_pile: ExhaustedPilePolicy,
    draw_pile: DrawPile,
    discards: DiscardStack,
    hands: PlayerMap<Vec<Card>>,
    active: PlayerId,
    phase: TurnPhase,
    turn: u32,
    sequence: u32,
    shower: Option<PlayerId>,
    history: Vec<ActionRecord>,
    rng: GameRng,
}

impl RoundState {
    /// Shuffle a fresh deck with `rng` and deal `config.hand_size` cards to
    /// each player in seat order. The rest becomes the draw pile.
    #[must_use]
    pub fn deal(round_number: u32, config: &GameConfig, mut rng: GameRng) -> Self {
        let mut draw_pile = DrawPile::new(shuffled_deck(&mut rng));
        let hands = PlayerMap::from_vec(
            (0..config.player_count())
                .map(|_| draw_pile.deal(config.hand_size))
                .collect(),
        );

        Self::from_parts(round_number, hands, draw_pile, config.exhausted_pile, rng)
    }

    /// Build a round from explicit hands and pile, with player 0 to act.
    #[must_use]
    pub fn from_parts(
        round_number: u32,
        hands: PlayerMap<Vec<Card>>,
        draw_pile: DrawPile,
        exhausted_pile: ExhaustedPilePolicy,
        rng: GameRng,
    ) -> Self {
        Self {
            round_number,
            exhausted_pile,
            draw_pile,
            discards: DiscardStack::new(),
            hands,
            active: PlayerId::new(0),
            phase: TurnPhase::Act,
            turn: 1,
            sequence: 0,
            shower: None,
            history: Vec::new(),
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player who ended the round, once someone has.
    #[must_use]
    pub fn shower(&self) -> Option<PlayerId> {
        self.shower
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Vec<Card>> {
        &self.hands
    }

    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    #[must_use]
    pub fn discards(&self) -> &DiscardStack {
        &self.discards
    }

    /// Every applied decision, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Cards across pile, hands and discard groups.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.hands.values().map(Vec::len).sum::<usize>()
            + self.discards.card_count()
    }

    /// Whether `DrawPile` would succeed for the active player.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.draw_pile.is_empty() || self.can_recycle()
    }

    /// Whether `TakeDiscard` would succeed for the active player.
    #[must_use]
    pub fn can_take(&self) -> bool {
        !self.discards.is_empty()
    }

    fn can_recycle(&self) -> bool {
        self.exhausted_pile == ExhaustedPilePolicy::RecycleDiscards && self.discards.len() > 1
    }

    /// What the active player sees.
    #[must_use]
    pub fn view(&self) -> PlayerView<'_> {
        PlayerView {
            round: self.round_number,
            turn: self.turn,
            player: self.active,
            phase: self.phase,
            hand: &self.hands[self.active],
            draw_pile_len: self.draw_pile.len(),
            top_discard: self.discards.top(),
            can_draw: self.can_draw(),
        }
    }

    /// Final hands, consuming the round.
    #[must_use]
    pub fn into_hands(self) -> PlayerMap<Vec<Card>> {
        self.hands
    }

    // === Transitions ===

    /// Apply the active player's draw, take or show.
    ///
    /// After a draw or take the player owes a discard; after a show the
    /// round is finished.
    pub fn apply_action(&mut self, action: TurnAction) -> Result<ActionKind, Rejection> {
        self.expect_phase(TurnPhase::Act)?;
        let player = self.active;

        let kind = match action {
            TurnAction::DrawPile => {
                if self.draw_pile.is_empty() {
                    if !self.can_recycle() {
                        return Err(Rejection::DrawPileEmpty);
                    }
                    self.recycle_discards();
                }
                let card = self.draw_pile.draw().ok_or(Rejection::DrawPileEmpty)?;
                self.hands[player].push(card);
                self.phase = TurnPhase::Discard;
                ActionKind::Draw(card)
            }
            TurnAction::TakeDiscard => {
                let group = self.discards.pop().ok_or(Rejection::NoDiscardGroup)?;
                self.hands[player].extend_from_slice(group.cards());
                self.phase = TurnPhase::Discard;
                ActionKind::Take(group)
            }
            TurnAction::Show => {
                self.finish(player);
                ActionKind::Show
            }
        };

        debug!("round {} turn {}: {} {:?}", self.round_number, self.turn, player, kind);
        self.record(player, kind.clone());
        Ok(kind)
    }

    /// Eject the selected cards from the active player's hand as a new
    /// discard group and pass the turn.
    pub fn apply_discard(&mut self, selection: &DiscardSelection) -> Result<DiscardGroup, Rejection> {
        self.expect_phase(TurnPhase::Discard)?;
        let player = self.active;
        let hand = &mut self.hands[player];
        validate_discard(hand, selection.indices())?;

        let mut indices = selection.indices().to_vec();
        indices.sort_unstable();
        let group = DiscardGroup::new(indices.iter().map(|&i| hand[i])).ok_or(DiscardError::MixedRanks)?;
        for &i in indices.iter().rev() {
            hand.remove(i);
        }

        debug!(
            "round {} turn {}: {} ejected {}",
            self.round_number,
            self.turn,
            player,
            group
        );
        self.record(player, ActionKind::Eject(group.clone()));
        self.discards.push(group.clone());
        self.advance_turn();

        Ok(group)
    }

    /// End the round for the active player if they can neither draw nor take.
    ///
    /// Returns true if a show was forced.
    pub fn force_show_if_stuck(&mut self) -> bool {
        if self.phase != TurnPhase::Act || self.can_draw() || self.can_take() {
            return false;
        }
        let player = self.active;
        warn!(
            "round {}: {} can neither draw nor take; forcing show",
            self.round_number, player
        );
        self.finish(player);
        self.record(player, ActionKind::ForcedShow);
        true
    }

    fn expect_phase(&self, expected: TurnPhase) -> Result<(), Rejection> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(Rejection::OutOfPhase { actual: self.phase })
        }
    }

    fn recycle_discards(&mut self) {
        let buried = self.discards.take_buried();
        let count = buried.len();
        self.draw_pile.refill(buried, &mut self.rng);
        info!(
            "round {}: draw pile empty, recycled {} discarded cards",
            self.round_number, count
        );
        self.record(self.active, ActionKind::Recycle { cards: count });
    }

    fn finish(&mut self, player: PlayerId) {
        self.shower = Some(player);
        self.phase = TurnPhase::Finished;
    }

    fn advance_turn(&mut self) {
        self.active = self.active.next(self.player_count());
        self.phase = TurnPhase::Act;
        self.turn += 1;
        self.sequence = 0;
    }

    fn record(&mut self, player: PlayerId, kind: ActionKind) {
        let record = ActionRecord::new(player, kind, self.turn, self.sequence);
        self.sequence += 1;
        self.history.push(record);
    }
}

/// Check a discard selection against a hand without touching it.
///
/// The selection must be non-empty, in range, free of duplicates and
/// reference cards of a single rank.
pub fn validate_discard(hand: &[Card], indices: &[usize]) -> Result<(), DiscardError> {
    if indices.is_empty() {
        return Err(DiscardError::Empty);
    }

    let mut seen = FxHashSet::default();
    for &index in indices {
        if index >= hand.len() {
            return Err(DiscardError::OutOfRange {
                index,
                hand_len: hand.len(),
            });
        }
        if !seen.insert(index) {
            return Err(DiscardError::Duplicate(index));
        }
    }

    let rank = hand[indices[0]].rank;
    if indices.iter().any(|&i| hand[i].rank != rank) {
        return Err(DiscardError::MixedRanks);
    }
    Ok(())
}

/// Drive `state` until someone shows and return the shower.
///
/// Every decision is preceded by `observer.decision_requested`. Rejections
/// go to both the provider and the observer before the same decision is
/// requested again.
pub fn run_round(
    state: &mut RoundState,
    provider: &mut dyn DecisionProvider,
    observer: &mut dyn GameObserver,
) -> PlayerId {
    info!(
        "round {} dealt: {} players, {} cards in draw pile",
        state.round_number,
        state.player_count(),
        state.draw_pile.len()
    );
    observer.round_started(state.round_number, state.draw_pile.len());

    loop {
        let applied_from = state.history.len();
        match state.phase {
            TurnPhase::Finished => break,
            TurnPhase::Act => {
                if state.force_show_if_stuck() {
                    settle(state, provider, observer, applied_from, Ok(()));
                    continue;
                }
                observer.decision_requested(&state.view());
                let choice = provider.choose_action(&state.view());
                let result = choice.and_then(|action| state.apply_action(action).map(|_| ()));
                settle(state, provider, observer, applied_from, result);
            }
            TurnPhase::Discard => {
                observer.decision_requested(&state.view());
                let choice = provider.choose_discard(&state.view());
                let result = choice.and_then(|selection| state.apply_discard(&selection).map(|_| ()));
                settle(state, provider, observer, applied_from, result);
            }
        }
    }

    let shower = state.shower.unwrap_or(state.active);
    info!(
        "round {}: show called by {} holding {}",
        state.round_number,
        shower,
        render_cards(state.hand(shower))
    );
    shower
}

/// Report the records a decision added, or the rejection it earned.
fn settle(
    state: &RoundState,
    provider: &mut dyn DecisionProvider,
    observer: &mut dyn GameObserver,
    applied_from: usize,
    result: Result<(), Rejection>,
) {
    match result {
        Ok(()) => {
            for record in &state.history[applied_from..] {
                observer.action_applied(record);
            }
        }
        Err(rejection) => {
            warn!("round {}: {} rejected: {}", state.round_number, state.active, rejection);
            provider.rejected(state.active, &rejection);
            observer.rejected(state.active, &rejection);
        }
    }
}
