use crate::game::GameConfig;

use super::error::{Result, TrialsError};

/// Configuration for a batch of trials
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrialsConfig {
    /// The game every trial plays
    pub game: GameConfig,
    /// Number of games to play
    pub game_instances: usize,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
    /// Number of worker threads to split the games across
    pub threads: usize,
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            game_instances: 1000,
            seed: None,
            threads: 1,
        }
    }
}

impl TrialsConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the parts of the configuration `GameConfig` doesn't cover
    pub fn validate(&self) -> Result<()> {
        if self.game_instances == 0 {
            return Err(TrialsError::NotEnoughGames);
        }

        if self.threads == 0 {
            return Err(TrialsError::NoWorkers);
        }

        Ok(())
    }

    /// How many games worker `worker_idx` plays.
    ///
    /// Games are dealt out as evenly as possible; the first
    /// `game_instances % threads` workers get one extra.
    pub fn games_for_worker(&self, worker_idx: usize) -> usize {
        let base = self.game_instances / self.threads;
        let extra = self.game_instances % self.threads;
        base + usize::from(worker_idx < extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrialsConfig::default();
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.game_instances, 1000);
        assert!(config.seed.is_none());
        assert_eq!(config.threads, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_games() {
        let config = TrialsConfig {
            game_instances: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TrialsError::NotEnoughGames)));
    }

    #[test]
    fn test_validate_zero_threads() {
        let config = TrialsConfig {
            threads: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TrialsError::NoWorkers)));
    }

    #[test]
    fn test_games_for_worker_sums_to_total() {
        for game_instances in [1, 2, 7, 100, 1001] {
            for threads in 1..9 {
                let config = TrialsConfig {
                    game_instances,
                    threads,
                    ..Default::default()
                };
                let total: usize = (0..threads).map(|w| config.games_for_worker(w)).sum();
                assert_eq!(total, game_instances);

                let max = (0..threads).map(|w| config.games_for_worker(w)).max();
                let min = (0..threads).map(|w| config.games_for_worker(w)).min();
                assert!(max.unwrap() - min.unwrap() <= 1);
            }
        }
    }
}
