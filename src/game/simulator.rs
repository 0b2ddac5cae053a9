use rand::Rng;
use tracing::event;

use super::{GameConfig, Strategy};

/// Whether the contestant drove home with the car.
pub type GameOutcome = bool;

/// Everything that happened in a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameRecord {
    /// The door hiding the car.
    pub car_door: usize,
    /// The contestant's first pick.
    pub initial_selection: usize,
    /// Doors opened by the host, in the order they were opened.
    pub revealed: Vec<usize>,
    /// The door the contestant ends the game on.
    pub final_selection: usize,
}

impl GameRecord {
    pub fn won(&self) -> GameOutcome {
        self.final_selection == self.car_door
    }

    pub fn switched(&self) -> bool {
        self.final_selection != self.initial_selection
    }

    pub fn is_revealed(&self, door: usize) -> bool {
        self.revealed.contains(&door)
    }
}

/// Play one game and report whether the contestant won the car.
///
/// This is [`play_game`] without keeping the trace around.
pub fn simulate_game<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameOutcome {
    play_game(config, rng).won()
}

/// Play one game, returning the full record of what happened.
///
/// Every door choice is a uniform draw over all doors. The host and the
/// switching contestant redraw until they hit an eligible door, so each
/// eligible door is equally likely.
///
/// Because `GameConfig` guarantees `reveal_count <= door_count - 2`, there
/// is always an eligible door to open and, afterwards, at least one closed
/// door besides the current pick. The redraw loops have no upper bound on
/// their iteration count, but they end with probability one.
pub fn play_game<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameRecord {
    let door_count = config.door_count();

    let car_door = rng.random_range(0..door_count);
    // The pick is independent of the car, it can land on it.
    let initial_selection = rng.random_range(0..door_count);

    let mut opened = vec![false; door_count];
    let mut revealed = Vec::with_capacity(config.reveal_count());
    while revealed.len() < config.reveal_count() {
        let door = rng.random_range(0..door_count);
        if door != car_door && door != initial_selection && !opened[door] {
            event!(tracing::Level::TRACE, door, car_door, "Host opened door");
            opened[door] = true;
            revealed.push(door);
        }
    }

    let final_selection = match config.strategy() {
        Strategy::Stay => initial_selection,
        Strategy::Switch => {
            let mut door = initial_selection;
            while door == initial_selection || opened[door] {
                door = rng.random_range(0..door_count);
            }
            door
        }
    };

    GameRecord {
        car_door,
        initial_selection,
        revealed,
        final_selection,
    }
}
