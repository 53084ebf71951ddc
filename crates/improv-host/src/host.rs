//! The show host: formats game progress as host dialogue cues.

use improv_game::{GameConfig, ScenarioCatalog, SessionStore};
use tracing::info;

use crate::format::preview;

/// Maximum characters of scenario text per summary line.
const SCENARIO_PREVIEW_LEN: usize = 50;
/// Maximum characters of reaction text per summary line.
const REACTION_PREVIEW_LEN: usize = 100;

/// Formats game-state transitions as lines for the host to speak.
///
/// One `ShowHost` serves every live room; the surrounding agent runtime
/// supplies the room name with each call and serializes calls per room.
pub struct ShowHost {
    catalog: ScenarioCatalog,
    store: SessionStore,
}

impl ShowHost {
    /// Create a host over a loaded catalog.
    pub fn new(catalog: ScenarioCatalog, config: GameConfig) -> Self {
        Self {
            catalog,
            store: SessionStore::new(config),
        }
    }

    /// The scenario catalog this host deals from.
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// The underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Mutable access to the underlying session store, for callers that
    /// record reactions or performance transcripts directly.
    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    /// Start the next round and return the announcement line.
    ///
    /// When no round has been played yet and a non-empty player name is
    /// supplied, the game is (re)initialized for that player first.
    /// Returns the game-complete line once every round has been played.
    pub fn start_new_round(&mut self, room: &str, player_name: Option<&str>) -> String {
        info!(room, player = player_name.unwrap_or(""), "Starting new round");

        if self.store.state(room).current_round == 0
            && let Some(name) = player_name.filter(|n| !n.is_empty())
        {
            let max_rounds = self.store.config().default_max_rounds;
            self.store.start_game(room, name, max_rounds);
        }

        let (state, scenario) = self.store.start_new_round(room, &self.catalog);
        match scenario {
            Some(record) => format!(
                "Round {} of {}: {}",
                state.current_round, state.max_rounds, record.text
            ),
            None => format!(
                "That's all {} rounds! Game complete. Time for the final summary.",
                state.max_rounds
            ),
        }
    }

    /// Current progress as a one-line status.
    pub fn status(&mut self, room: &str) -> String {
        info!(room, "Getting game status");

        let state = self.store.state(room);
        format!(
            "Player: {}, Round: {}/{}, Phase: {}",
            state.player_name.as_deref().unwrap_or("Unknown"),
            state.current_round,
            state.max_rounds,
            state.phase
        )
    }

    /// End the game early and return the confirmation line.
    pub fn end_early(&mut self, room: &str) -> String {
        info!(room, "Ending game early");

        let state = self.store.end_game(room);
        format!(
            "Game ended. {} completed {} out of {} rounds. Time to wrap up!",
            state.player_name.as_deref().unwrap_or("The player"),
            state.current_round,
            state.max_rounds
        )
    }

    /// The complete multi-line wrap-up for the end of the show.
    ///
    /// Scenario and reaction lines are truncated to 50 and 100 characters
    /// for speakable brevity.
    pub fn final_summary(&mut self, room: &str) -> String {
        info!(room, "Getting final summary");

        let summary = self.store.summary(room);
        let mut out = format!(
            "Game Summary for {}:\n",
            summary.player_name.as_deref().unwrap_or("Unknown")
        );
        out.push_str(&format!("Completed {} rounds.\n\n", summary.total_rounds));

        for round in &summary.rounds {
            out.push_str(&format!(
                "Round {}: {}...\n",
                round.round,
                preview(&round.scenario, SCENARIO_PREVIEW_LEN)
            ));
            if !round.reaction.is_empty() {
                out.push_str(&format!(
                    "Your reaction: {}...\n",
                    preview(&round.reaction, REACTION_PREVIEW_LEN)
                ));
            }
            out.push('\n');
        }

        out
    }
}
