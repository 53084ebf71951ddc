//! Scenario selection policy.
//!
//! The opening rounds deal a fixed id sequence so every show starts the
//! same way; later rounds draw randomly without repeats until the catalog
//! is exhausted, at which point the used set resets and dealing continues.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::catalog::{ScenarioCatalog, ScenarioRecord};
use crate::state::GameState;

/// Select the scenario for the state's current round.
///
/// Rounds `1..=fixed_ids.len()` deal `fixed_ids` in order whenever the id
/// exists in the catalog; a missing fixed id falls through to the random
/// draw for that round. Random draws exclude already-dealt ids until every
/// catalog entry has been dealt, then the used set is cleared and the whole
/// catalog becomes the pool again; the draw right after a reset may repeat
/// a scenario dealt earlier in the session. The dealt id is recorded in
/// `used_scenario_ids` either way.
pub fn select_scenario(
    state: &mut GameState,
    catalog: &ScenarioCatalog,
    fixed_ids: &[u32],
    rng: &mut StdRng,
) -> ScenarioRecord {
    // Fixed openers keep demo shows reproducible.
    if state.current_round >= 1 && (state.current_round as usize) <= fixed_ids.len() {
        let fixed_id = fixed_ids[state.current_round as usize - 1];
        if let Some(record) = catalog.get(fixed_id) {
            state.used_scenario_ids.insert(fixed_id);
            info!(
                session_id = %state.session_id,
                round = state.current_round,
                scenario_id = fixed_id,
                "Using fixed scenario"
            );
            return record.clone();
        }
        debug!(
            session_id = %state.session_id,
            scenario_id = fixed_id,
            "Fixed scenario not in catalog, drawing randomly"
        );
    }

    let available: Vec<&ScenarioRecord> = catalog
        .scenarios()
        .iter()
        .filter(|s| !state.used_scenario_ids.contains(&s.id))
        .collect();

    let pool = if available.is_empty() {
        info!(session_id = %state.session_id, "All scenarios used, resetting available pool");
        state.used_scenario_ids.clear();
        catalog.scenarios().iter().collect()
    } else {
        available
    };

    let record = pool[rng.random_range(0..pool.len())].clone();
    state.used_scenario_ids.insert(record.id);
    info!(
        session_id = %state.session_id,
        round = state.current_round,
        scenario_id = record.id,
        "Using random scenario"
    );
    record
}
