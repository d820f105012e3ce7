//! Multi-round session: deal, play, score, accumulate, rank.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::round::{run_round, RoundState};
use super::scoring::{score_show, RoundScore};
use crate::cards::{sort_for_reveal, Card};
use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap};
use crate::rules::{DecisionProvider, GameObserver, NullObserver};

/// A `GameObserver` that also hears about round results and the final ranking.
pub trait SessionObserver: GameObserver {
    /// A round was scored and totals updated.
    fn round_finished(&mut self, _summary: &RoundSummary) {}

    /// All rounds are done.
    fn session_finished(&mut self, _ranking: &FinalRanking) {}
}

impl SessionObserver for NullObserver {}

/// Everything that happened at the end of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,

    /// Hands as revealed at the show.
    pub final_hands: PlayerMap<Vec<Card>>,

    pub score: RoundScore,

    /// Totals after this round's additions.
    pub totals: PlayerMap<u32>,
}

impl RoundSummary {
    #[must_use]
    pub fn shower(&self) -> PlayerId {
        self.score.shower
    }
}

/// One line of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub total: u32,
}

/// Players ordered by total, lowest first. Ties keep seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRanking {
    pub standings: Vec<Standing>,
}

impl FinalRanking {
    /// Rank players by ascending total with a stable sort.
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let mut standings: Vec<Standing> = players
            .iter()
            .map(|(player, p)| Standing {
                player,
                name: p.name.clone(),
                total: p.total_score,
            })
            .collect();
        standings.sort_by_key(|s| s.total);
        Self { standings }
    }

    /// The lowest total. Among equal totals, the earliest seat.
    #[must_use]
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }
}

/// A sequence of rounds over a fixed table.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    players: PlayerMap<Player>,
    rng: GameRng,
    rounds_played: u32,
    summaries: Vec<RoundSummary>,
}

impl GameSession {
    /// Validate `config` and seat the players. Fails before any deal.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let players = PlayerMap::from_vec(config.players.iter().map(Player::new).collect());
        let rng = GameRng::from_optional_seed(config.seed);
        info!(
            "session: {} players, {} rounds, seed {}",
            config.player_count(),
            config.rounds,
            rng.seed()
        );

        Ok(Self {
            config,
            players,
            rng,
            rounds_played: 0,
            summaries: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Seed of the session RNG, for replaying an entropy-seeded session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rounds_played >= self.config.rounds
    }

    /// Summaries of every completed round.
    #[must_use]
    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    /// Deal a fresh round with its own RNG stream.
    #[must_use]
    pub fn deal_round(&mut self) -> RoundState {
        RoundState::deal(self.rounds_played + 1, &self.config, self.rng.fork())
    }

    /// Score a finished round and add each player's addition to their total.
    ///
    /// Final hands are stored in reveal order.
    ///
    /// Returns `None` if `round` has no shower yet, was dealt for a different
    /// number of seats, or all rounds are done.
    pub fn record_round(&mut self, round: RoundState) -> Option<&RoundSummary> {
        if self.is_finished() {
            return None;
        }
        if round.player_count() != self.players.player_count() {
            warn!(
                "round {} has {} seats, session has {}; not recorded",
                round.round_number(),
                round.player_count(),
                self.players.player_count()
            );
            return None;
        }
        let shower = round.shower()?;
        let round_number = round.round_number();
        let mut final_hands = round.into_hands();
        for (_, hand) in final_hands.iter_mut() {
            sort_for_reveal(hand);
        }
        let score = score_show(&final_hands, shower, self.config.show_penalty);

        for (player, seat) in self.players.iter_mut() {
            seat.total_score += score.additions[player];
            seat.hand = final_hands[player].clone();
            info!(
                "round {}: {} +{} (total {})",
                round_number, seat.name, score.additions[player], seat.total_score
            );
        }

        self.rounds_played += 1;
        self.summaries.push(RoundSummary {
            round: round_number,
            final_hands,
            score,
            totals: self.players.map(|_, p| p.total_score),
        });
        self.summaries.last()
    }

    /// Play the next round to completion. `None` once all rounds are done.
    pub fn play_round<O: SessionObserver>(
        &mut self,
        provider: &mut dyn DecisionProvider,
        observer: &mut O,
    ) -> Option<&RoundSummary> {
        if self.is_finished() {
            return None;
        }
        let mut round = self.deal_round();
        run_round(&mut round, provider, observer);

        let summary = self.record_round(round)?;
        observer.round_finished(summary);
        Some(summary)
    }

    /// Play every remaining round and return the final ranking.
    pub fn play<O: SessionObserver>(
        &mut self,
        provider: &mut dyn DecisionProvider,
        observer: &mut O,
    ) -> FinalRanking {
        while self.play_round(provider, observer).is_some() {}

        let ranking = self.ranking();
        if let Some(winner) = ranking.winner() {
            info!("session over: {} wins with {}", winner.name, winner.total);
        }
        observer.session_finished(&ranking);
        ranking
    }

    /// Current standings.
    #[must_use]
    pub fn ranking(&self) -> FinalRanking {
        FinalRanking::from_players(&self.players)
    }
}
