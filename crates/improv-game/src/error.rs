//! Error types for the game engine.

use thiserror::Error;

/// Convenience result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading the scenario catalog.
///
/// These never escape the engine: a failed load degrades to the built-in
/// fallback catalog, and no session operation returns an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON list of scenario objects.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}
