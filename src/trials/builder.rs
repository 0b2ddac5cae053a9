use crate::game::{GameConfig, Strategy};

use super::config::TrialsConfig;
use super::error::Result;
use super::runner::MontyHallTrials;

/// Builder for constructing MontyHallTrials instances
///
/// Unset values fall back to the classic game: three doors, one reveal,
/// switching, one thousand games on a single thread.
///
/// # Example
///
/// ```
/// use monty_hall::game::Strategy;
/// use monty_hall::trials::TrialsBuilder;
///
/// let trials = TrialsBuilder::new()
///     .door_count(10)
///     .reveal_count(8)
///     .strategy(Strategy::Switch)
///     .game_instances(5_000)
///     .threads(2)
///     .seed(42)
///     .build()?;
///
/// assert_eq!(trials.game().door_count(), 10);
/// # Ok::<(), monty_hall::trials::TrialsError>(())
/// ```
#[derive(Debug, Default)]
pub struct TrialsBuilder {
    game: Option<GameConfig>,
    door_count: Option<usize>,
    reveal_count: Option<usize>,
    strategy: Option<Strategy>,
    game_instances: Option<usize>,
    seed: Option<u64>,
    threads: Option<usize>,
}

impl TrialsBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already validated game configuration
    ///
    /// Door count, reveal count and strategy set afterwards override the
    /// matching parts of it.
    pub fn game(mut self, game: GameConfig) -> Self {
        self.game = Some(game);
        self
    }

    /// Set the number of doors in each game
    pub fn door_count(mut self, door_count: usize) -> Self {
        self.door_count = Some(door_count);
        self
    }

    /// Set the number of doors the host opens in each game
    pub fn reveal_count(mut self, reveal_count: usize) -> Self {
        self.reveal_count = Some(reveal_count);
        self
    }

    /// Set the contestant's strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the number of games to play
    pub fn game_instances(mut self, game_instances: usize) -> Self {
        self.game_instances = Some(game_instances);
        self
    }

    /// Set the random seed for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of worker threads
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Build the MontyHallTrials
    ///
    /// Returns an error if the game or the run configuration is invalid.
    pub fn build(self) -> Result<MontyHallTrials> {
        let defaults = TrialsConfig::default();
        let base = self.game.unwrap_or(defaults.game);

        let game = GameConfig::new(
            self.door_count.unwrap_or(base.door_count()),
            self.reveal_count.unwrap_or(base.reveal_count()),
            self.strategy.unwrap_or(base.strategy()),
        )?;

        let config = TrialsConfig {
            game,
            game_instances: self.game_instances.unwrap_or(defaults.game_instances),
            seed: self.seed,
            threads: self.threads.unwrap_or(defaults.threads),
        };

        config.validate()?;

        Ok(MontyHallTrials::new(config))
    }
}

/// Shorthand for the builder when only the game needs setting
impl From<GameConfig> for TrialsBuilder {
    fn from(game: GameConfig) -> Self {
        Self::new().game(game)
    }
}
