//! Host-facing dialogue surface for Improv Battle.
//!
//! Renders the game engine's state transitions as the short display
//! strings the conversational voice agent speaks: round announcements,
//! status lines, early-end confirmations, and the final multi-line
//! summary. The voice infrastructure itself (speech, language model,
//! room plumbing) lives outside this workspace and calls in here.

pub mod format;
pub mod host;

pub use host::ShowHost;
