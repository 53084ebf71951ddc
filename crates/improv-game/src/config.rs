//! Configuration for the game engine.

/// Configuration for a session store.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible scenario draws.
    pub seed: u64,
    /// Rounds per game unless the caller overrides it at game start.
    pub default_max_rounds: u32,
    /// Scenario ids dealt deterministically for the opening rounds.
    pub fixed_ids: Vec<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            default_max_rounds: 3,
            fixed_ids: vec![1, 2, 3],
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the default number of rounds per game.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.default_max_rounds = rounds;
        self
    }

    /// Set the fixed opening scenario ids. An empty list makes every
    /// round a random draw.
    pub fn with_fixed_ids(mut self, ids: Vec<u32>) -> Self {
        self.fixed_ids = ids;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.default_max_rounds, 3);
        assert_eq!(cfg.fixed_ids, vec![1, 2, 3]);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_max_rounds(5)
            .with_fixed_ids(vec![7]);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.default_max_rounds, 5);
        assert_eq!(cfg.fixed_ids, vec![7]);
    }
}
