use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::event;

use crate::game::{GameConfig, simulate_game};

use super::config::TrialsConfig;
use super::error::Result;
use super::result::SimulationResult;

/// Play `game_instances` games of `config`, all drawing from `rng`.
///
/// # Panics
///
/// Panics if the tally is inconsistent (see
/// [`SimulationResult::assert_consistent`]).
pub fn run_trials<R: Rng + ?Sized>(
    config: &GameConfig,
    game_instances: usize,
    rng: &mut R,
) -> SimulationResult {
    let mut result = SimulationResult::new(*config);
    for _ in 0..game_instances {
        result.record(simulate_game(config, rng));
    }
    result.assert_consistent();
    result
}

/// A validated batch of trials, ready to run
///
/// Built with [`super::TrialsBuilder`]. With a single worker every game
/// draws from one seeded generator. With more, each worker gets its own
/// generator seeded from the base seed plus its index, and the partial
/// tallies are merged.
#[derive(Debug)]
pub struct MontyHallTrials {
    config: TrialsConfig,
}

impl MontyHallTrials {
    /// Create a new MontyHallTrials (internal - use TrialsBuilder instead)
    pub(crate) fn new(config: TrialsConfig) -> Self {
        Self { config }
    }

    /// Get the trials configuration
    pub fn config(&self) -> &TrialsConfig {
        &self.config
    }

    /// Get the game configuration
    pub fn game(&self) -> &GameConfig {
        &self.config.game
    }

    /// Run all of the games and return the tally
    pub fn run(&self) -> Result<SimulationResult> {
        let game = self.config.game;
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);

        event!(
            tracing::Level::INFO,
            door_count = game.door_count(),
            reveal_count = game.reveal_count(),
            strategy = %game.strategy(),
            game_instances = self.config.game_instances,
            threads = self.config.threads,
            seed,
            "Starting Monty Hall trials"
        );

        let result = if self.config.threads == 1 {
            let mut rng = StdRng::seed_from_u64(seed);
            run_trials(&game, self.config.game_instances, &mut rng)
        } else {
            self.run_workers(seed)
        };

        result.assert_consistent();

        event!(
            tracing::Level::INFO,
            cars_won = result.cars_won(),
            goats_won = result.goats_won(),
            car_ratio = result.car_ratio(),
            "Finished Monty Hall trials"
        );

        Ok(result)
    }

    /// Split the games across scoped worker threads, one generator each
    fn run_workers(&self, seed: u64) -> SimulationResult {
        let game = self.config.game;
        let threads = self.config.threads;

        let partials: Vec<std::thread::Result<SimulationResult>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|worker_idx| {
                    let games = self.config.games_for_worker(worker_idx);
                    s.spawn(move || {
                        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(worker_idx as u64));
                        event!(
                            tracing::Level::DEBUG,
                            worker_idx,
                            games,
                            "Worker starting"
                        );
                        run_trials(&game, games, &mut rng)
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join()).collect()
        });

        merge_partials(game, partials)
    }

    /// A human readable summary of the configuration
    pub fn configuration_summary(&self) -> String {
        let game = &self.config.game;
        let mut output = String::new();
        output.push_str("Monty Hall Configuration\n");
        output.push_str("========================\n");
        output.push_str(&format!("Doors: {}\n", game.door_count()));
        output.push_str(&format!("Doors Revealed: {}\n", game.reveal_count()));
        output.push_str(&format!("Strategy: {}\n", game.strategy()));
        output.push_str(&format!("Games: {}\n", self.config.game_instances));
        if self.config.threads > 1 {
            output.push_str(&format!("Worker Threads: {}\n", self.config.threads));
        }
        if let Some(seed) = self.config.seed {
            output.push_str(&format!("Random Seed: {}\n", seed));
        }
        output
    }
}

/// Merge worker tallies in worker order.
///
/// A worker that panicked (an inconsistent tally is fatal) has its panic
/// re-raised on the calling thread.
fn merge_partials(
    game: GameConfig,
    partials: Vec<std::thread::Result<SimulationResult>>,
) -> SimulationResult {
    let mut result = SimulationResult::new(game);
    for (worker_idx, partial) in partials.into_iter().enumerate() {
        let partial = partial.unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        event!(
            tracing::Level::DEBUG,
            worker_idx,
            cars_won = partial.cars_won(),
            goats_won = partial.goats_won(),
            "Worker finished"
        );
        result.merge(&partial);
    }
    result
}
