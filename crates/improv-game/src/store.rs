//! In-memory session store keyed by room name.
//!
//! The store owns every live [`GameState`] plus the RNG used for scenario
//! draws. It is constructed once by the surrounding service and passed by
//! handle to whatever needs session state. Operations never fail: an
//! unknown session id lazily creates a default state, and game-over is
//! signaled through return values rather than errors. Callers serialize
//! access per session id; distinct sessions are independent.

use std::collections::HashMap;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::catalog::{ScenarioCatalog, ScenarioRecord};
use crate::config::GameConfig;
use crate::select::select_scenario;
use crate::state::{GameState, Phase, RoundRecord};
use crate::summary::GameSummary;

/// Process-wide store of per-session game state.
pub struct SessionStore {
    sessions: HashMap<String, GameState>,
    rng: StdRng,
    config: GameConfig,
}

impl SessionStore {
    /// Create a store from a configuration.
    pub fn new(config: GameConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of sessions currently tracked.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store tracks no sessions yet.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn entry(&mut self, session_id: &str) -> &mut GameState {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                info!(session_id, "Created new game state");
                GameState::new(session_id)
            })
    }

    /// Get the state for a session, creating a default one if absent.
    pub fn state(&mut self, session_id: &str) -> &GameState {
        self.entry(session_id)
    }

    /// Idempotently (re)initialize a session for a fresh game.
    ///
    /// Callable at any time, including mid-game, to restart with a new
    /// player name and round count.
    pub fn start_game(
        &mut self,
        session_id: &str,
        player_name: impl Into<String>,
        max_rounds: u32,
    ) -> &GameState {
        let name = player_name.into();
        info!(session_id, player = %name, max_rounds, "Started game");
        let state = self.entry(session_id);
        state.restart(name, max_rounds);
        state
    }

    /// Discard a session's state and replace it with a fresh default.
    pub fn reset(&mut self, session_id: &str) -> &GameState {
        info!(session_id, "Reset game state");
        self.sessions
            .insert(session_id.to_string(), GameState::new(session_id));
        self.entry(session_id)
    }

    /// Start the next round and deal its scenario.
    ///
    /// Returns `None` for the scenario when every round has been played;
    /// the phase flips to done and the round history is left untouched.
    /// Otherwise the previous round (if any) is implicitly completed, the
    /// round counter advances, a scenario is dealt per the selection
    /// policy, and the phase becomes awaiting-performance.
    pub fn start_new_round(
        &mut self,
        session_id: &str,
        catalog: &ScenarioCatalog,
    ) -> (&GameState, Option<ScenarioRecord>) {
        let Self {
            sessions,
            rng,
            config,
        } = self;
        let state = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                info!(session_id, "Created new game state");
                GameState::new(session_id)
            });

        if state.current_round >= state.max_rounds {
            state.phase = Phase::Done;
            info!(session_id, "Game over");
            return (state, None);
        }

        // The caller may never have recorded a reaction for the previous
        // round; dealing a new one completes it implicitly.
        if let Some(prev) = state.last_round_mut()
            && !prev.completed
        {
            prev.completed = true;
            prev.ended_at = Some(Utc::now());
        }

        state.current_round += 1;

        let record = select_scenario(state, catalog, &config.fixed_ids, rng);
        state
            .rounds
            .push(RoundRecord::new(state.current_round, record.id, record.text.clone()));
        state.phase = Phase::AwaitingPerformance;

        (state, Some(record))
    }

    /// Attach the player's performance transcript to the latest round.
    ///
    /// No-op when no round has been dealt yet.
    pub fn record_performance(&mut self, session_id: &str, transcript: &str) -> &GameState {
        let state = self.entry(session_id);
        if let Some(round) = state.last_round_mut() {
            round.performance_transcript = transcript.to_string();
            debug!(session_id, round = round.round_number, "Recorded performance");
        }
        state
    }

    /// Record the host's reaction to the latest round and mark it complete.
    ///
    /// No-op when no round has been dealt yet; earlier rounds are never
    /// touched.
    pub fn record_reaction(&mut self, session_id: &str, reaction: &str) -> &GameState {
        let state = self.entry(session_id);
        if let Some(round) = state.last_round_mut() {
            round.host_reaction = reaction.to_string();
            round.completed = true;
            round.ended_at = Some(Utc::now());
            let number = round.round_number;
            state.phase = Phase::Reacting;
            info!(session_id, round = number, "Recorded reaction");
        }
        state
    }

    /// Force the game into the done phase, regardless of round count.
    ///
    /// Round history and the round counter are left untouched.
    pub fn end_game(&mut self, session_id: &str) -> &GameState {
        let state = self.entry(session_id);
        state.phase = Phase::Done;
        info!(session_id, rounds_played = state.rounds.len(), "Ended game");
        state
    }

    /// Project a read-only summary of a session's game.
    pub fn summary(&mut self, session_id: &str) -> GameSummary {
        GameSummary::of(self.entry(session_id))
    }

    /// Whether the session's game has finished.
    pub fn is_game_over(&mut self, session_id: &str) -> bool {
        self.entry(session_id).is_over()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
