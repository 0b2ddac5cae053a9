//! Monte Carlo simulation of the generalized Monty Hall problem.
//!
//! A game has `door_count` doors. One hides a car and the rest hide goats.
//! The contestant picks a door, the host opens `reveal_count` doors that
//! are neither the car nor the contestant's pick, and the contestant then
//! either stays with the pick or switches to another closed door.
//!
//! The crate is split in two:
//!
//! - [`game`] plays a single game with an injected random number
//!   generator.
//! - [`trials`] plays many games under one configuration and reduces the
//!   outcomes to win ratios.
//!
//! # Example
//!
//! ```
//! use monty_hall::game::{GameConfig, Strategy};
//! use monty_hall::trials::run_trials;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = GameConfig::new(3, 1, Strategy::Switch).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = run_trials(&config, 10_000, &mut rng);
//!
//! // Switching wins about two thirds of the time.
//! assert!((result.car_ratio() - 2.0 / 3.0).abs() < 0.03);
//! ```
//!
//! For seeding, worker threads and validation of raw inputs in one place
//! use [`trials::TrialsBuilder`].

/// Single game configuration and simulation.
pub mod game;

/// Running many games and summarizing the outcomes.
pub mod trials;

/// Assertions shared by the tests of this crate and its users.
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
