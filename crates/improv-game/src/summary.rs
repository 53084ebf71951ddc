//! Read-only game summary projection.

use serde::{Deserialize, Serialize};

use crate::state::{GameState, Phase};

/// Summary of one round for the final wrap-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u32,
    /// The scenario dealt this round.
    pub scenario: String,
    /// The host's reaction, empty if none was recorded.
    pub reaction: String,
    /// Whether the round completed.
    pub completed: bool,
}

/// Read-only projection of a session's game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Player name, if the game was started with one.
    pub player_name: Option<String>,
    /// Rounds dealt so far.
    pub total_rounds: usize,
    /// Rounds in a full game.
    pub max_rounds: u32,
    /// Whether the game has finished.
    pub completed: bool,
    /// Per-round breakdown, in play order.
    pub rounds: Vec<RoundSummary>,
}

impl GameSummary {
    /// Project a summary from a game state. Pure: the state is unchanged
    /// and successive calls yield identical summaries.
    pub fn of(state: &GameState) -> Self {
        Self {
            player_name: state.player_name.clone(),
            total_rounds: state.rounds.len(),
            max_rounds: state.max_rounds,
            completed: state.phase == Phase::Done,
            rounds: state
                .rounds
                .iter()
                .map(|r| RoundSummary {
                    round: r.round_number,
                    scenario: r.scenario_text.clone(),
                    reaction: r.host_reaction.clone(),
                    completed: r.completed,
                })
                .collect(),
        }
    }
}
