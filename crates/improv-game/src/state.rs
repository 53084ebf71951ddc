//! Game state for one improv battle session.
//!
//! A session plays a bounded number of rounds. Each round deals a scenario,
//! waits for the player's performance, and records the host's reaction.
//! Round history is append-only; the latest round is reached through
//! explicit accessors rather than list-end conventions at call sites.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rounds per game when nothing overrides it.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Game created, no round dealt yet.
    Intro,
    /// A scenario has been announced; the player is performing.
    AwaitingPerformance,
    /// The host has reacted to the latest performance.
    Reacting,
    /// All rounds played, or the game was ended early.
    Done,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::AwaitingPerformance => "awaiting_performance",
            Self::Reacting => "reacting",
            Self::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// One played round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number, sequential within a session.
    pub round_number: u32,
    /// The dealt scenario's premise.
    pub scenario_text: String,
    /// The dealt scenario's id.
    pub scenario_id: u32,
    /// Transcript of the player's performance, empty until supplied.
    pub performance_transcript: String,
    /// The host's reaction, empty until recorded.
    pub host_reaction: String,
    /// Whether the round has been reacted to or superseded by a new round.
    pub completed: bool,
    /// When the scenario was dealt.
    pub started_at: DateTime<Utc>,
    /// When the round completed, if it has.
    pub ended_at: Option<DateTime<Utc>>,
}

impl RoundRecord {
    /// Create a fresh record for a just-dealt scenario.
    pub fn new(round_number: u32, scenario_id: u32, scenario_text: impl Into<String>) -> Self {
        Self {
            round_number,
            scenario_text: scenario_text.into(),
            scenario_id,
            performance_transcript: String::new(),
            host_reaction: String::new(),
            completed: false,
            started_at: Utc::now(),
            ended_at: None,
        }
    }
}

/// Mutable game state for one session (room).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The owning session (room) identifier.
    pub session_id: String,
    /// Player name, set when the game starts.
    pub player_name: Option<String>,
    /// Rounds dealt so far (0 before the first deal).
    pub current_round: u32,
    /// Rounds in a full game.
    pub max_rounds: u32,
    /// Round history, append-only.
    pub rounds: Vec<RoundRecord>,
    /// Lifecycle stage.
    pub phase: Phase,
    /// Ids of scenarios dealt this session, cleared on exhaustion.
    pub used_scenario_ids: HashSet<u32>,
}

impl GameState {
    /// Create a default state for a session: intro phase, round zero.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            player_name: None,
            current_round: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            rounds: Vec::new(),
            phase: Phase::Intro,
            used_scenario_ids: HashSet::new(),
        }
    }

    /// Restart this state for a fresh game, keeping the session id.
    pub fn restart(&mut self, player_name: impl Into<String>, max_rounds: u32) {
        self.player_name = Some(player_name.into());
        self.max_rounds = max_rounds;
        self.current_round = 0;
        self.rounds.clear();
        self.phase = Phase::Intro;
        self.used_scenario_ids.clear();
    }

    /// The most recently dealt round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    /// Mutable access to the most recently dealt round, if any.
    pub fn last_round_mut(&mut self) -> Option<&mut RoundRecord> {
        self.rounds.last_mut()
    }

    /// Whether all rounds have been played or the game ended early.
    pub fn is_over(&self) -> bool {
        self.current_round >= self.max_rounds || self.phase == Phase::Done
    }
}
