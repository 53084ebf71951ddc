//! Game-state engine for Improv Battle.
//!
//! Tracks per-session round progression for a turn-based improv game run by
//! a conversational voice agent: a scenario catalog loaded once at startup
//! with a built-in fallback, a fixed-then-random selection policy with
//! no-repeat/reset, an in-memory session store keyed by room name, and
//! summary aggregation. The surrounding voice infrastructure calls in
//! through [`SessionStore`], one conversational turn at a time per session.

pub mod catalog;
pub mod config;
pub mod error;
pub mod select;
pub mod state;
pub mod store;
pub mod summary;

pub use catalog::{ScenarioCatalog, ScenarioRecord};
pub use config::GameConfig;
pub use error::CatalogError;
pub use state::{GameState, Phase, RoundRecord};
pub use store::SessionStore;
pub use summary::{GameSummary, RoundSummary};
