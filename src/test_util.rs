use approx::assert_abs_diff_eq;

use crate::game::{GameConfig, GameRecord, Strategy};
use crate::trials::{RATIO_EPSILON, SimulationResult};

/// Check that a game followed the rules for `config`.
pub fn assert_valid_game_record(config: &GameConfig, record: &GameRecord) {
    let door_count = config.door_count();

    assert!(record.car_door < door_count, "{record:?}");
    assert!(record.initial_selection < door_count, "{record:?}");
    assert!(record.final_selection < door_count, "{record:?}");

    assert_eq!(record.revealed.len(), config.reveal_count());

    let mut opened = vec![false; door_count];
    for &door in &record.revealed {
        assert!(door < door_count, "{record:?}");
        assert!(!opened[door], "Door {door} opened twice: {record:?}");
        opened[door] = true;

        // The host never shows the car or the contestant's pick.
        assert_ne!(door, record.car_door, "{record:?}");
        assert_ne!(door, record.initial_selection, "{record:?}");
    }

    match config.strategy() {
        Strategy::Stay => assert_eq!(record.final_selection, record.initial_selection),
        Strategy::Switch => {
            assert_ne!(record.final_selection, record.initial_selection);
            assert!(!opened[record.final_selection], "{record:?}");
        }
    }
}

/// Check the counting invariants of an aggregated result.
pub fn assert_valid_simulation_result(result: &SimulationResult) {
    assert!(result.game_instances() > 0);
    assert_eq!(
        result.cars_won() + result.goats_won(),
        result.game_instances(),
        "Every game ends with a car or a goat"
    );
    assert_abs_diff_eq!(
        result.car_ratio() + result.goat_ratio(),
        1.0,
        epsilon = RATIO_EPSILON
    );
    assert!((0.0..=1.0).contains(&result.car_ratio()));
}

/// Check that an empirical car ratio is within `sigmas` standard errors of
/// the exact win probability.
pub fn assert_near_theoretical(result: &SimulationResult, sigmas: f64) {
    let expected = result.theoretical_car_ratio();
    let games = result.game_instances() as f64;
    let tolerance = sigmas * (expected * (1.0 - expected) / games).sqrt();
    assert_abs_diff_eq!(result.car_ratio(), expected, epsilon = tolerance);
}
