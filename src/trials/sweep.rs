use rand::Rng;
use tracing::event;

use crate::game::{GameConfig, GameConfigError, Strategy};

use super::error::{Result, TrialsError};
use super::result::SimulationResult;
use super::runner::run_trials;

/// Run `game_instances` games for every legal reveal count of `door_count`.
///
/// Results come back ordered by reveal count, from one up to
/// `door_count - 2`. All games draw from the same generator.
///
/// # Errors
///
/// Returns an error if `door_count < 3` or `game_instances == 0`.
pub fn sweep_reveal_counts<R: Rng + ?Sized>(
    door_count: usize,
    strategy: Strategy,
    game_instances: usize,
    rng: &mut R,
) -> Result<Vec<SimulationResult>> {
    if door_count < 3 {
        return Err(GameConfigError::NotEnoughDoors { door_count }.into());
    }
    if game_instances == 0 {
        return Err(TrialsError::NotEnoughGames);
    }

    (1..=door_count - 2)
        .map(|reveal_count| -> Result<SimulationResult> {
            let config = GameConfig::new(door_count, reveal_count, strategy)?;
            let result = run_trials(&config, game_instances, rng);
            event!(
                tracing::Level::DEBUG,
                door_count,
                reveal_count,
                car_ratio = result.car_ratio(),
                "Finished sweep step"
            );
            Ok(result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::test_util::{assert_near_theoretical, assert_valid_simulation_result};

    use super::*;

    #[test]
    fn test_sweep_covers_every_reveal_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let results = sweep_reveal_counts(6, Strategy::Stay, 100, &mut rng).unwrap();

        let reveals: Vec<usize> = results.iter().map(|r| r.config().reveal_count()).collect();
        assert_eq!(reveals, vec![1, 2, 3, 4]);
        for result in &results {
            assert_eq!(result.game_instances(), 100);
            assert_valid_simulation_result(result);
        }
    }

    #[test]
    fn test_three_doors_has_one_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let results = sweep_reveal_counts(3, Strategy::Switch, 10, &mut rng).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test_log::test]
    fn test_switching_improves_with_more_reveals() {
        let mut rng = StdRng::seed_from_u64(42);
        let results = sweep_reveal_counts(10, Strategy::Switch, 40_000, &mut rng).unwrap();

        // The gaps between neighbouring reveal counts are at least 0.01,
        // far wider than the noise at this many games.
        let ratios: Vec<f64> = results.iter().map(|r| r.car_ratio()).collect();
        assert!(
            ratios.windows(2).all(|w| w[0] < w[1]),
            "Expected increasing ratios, got {ratios:?}"
        );

        let last = results.last().unwrap();
        assert_relative_eq!(last.theoretical_car_ratio(), 0.9);
        for result in &results {
            assert_near_theoretical(result, 5.0);
        }
    }

    #[test]
    fn test_staying_ignores_reveals() {
        let mut rng = StdRng::seed_from_u64(3);
        let results = sweep_reveal_counts(5, Strategy::Stay, 20_000, &mut rng).unwrap();
        for result in &results {
            assert_near_theoretical(result, 5.0);
            assert_relative_eq!(result.theoretical_car_ratio(), 0.2);
        }
    }

    #[test]
    fn test_sweep_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sweep_reveal_counts(2, Strategy::Switch, 10, &mut rng),
            Err(TrialsError::InvalidGame(GameConfigError::NotEnoughDoors {
                door_count: 2
            }))
        ));
        assert!(matches!(
            sweep_reveal_counts(4, Strategy::Switch, 0, &mut rng),
            Err(TrialsError::NotEnoughGames)
        ));
    }
}
