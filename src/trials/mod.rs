//! Running many Monty Hall games and summarizing the outcomes.
//!
//! [`run_trials`] is the core loop: it plays a fixed number of games with
//! one configuration and one random number generator and counts the cars
//! and goats won. [`TrialsBuilder`] wraps it with input validation,
//! seeding and optional worker threads.
//!
//! # Example
//!
//! ```
//! use monty_hall::game::Strategy;
//! use monty_hall::trials::TrialsBuilder;
//!
//! let trials = TrialsBuilder::new()
//!     .door_count(3)
//!     .reveal_count(1)
//!     .strategy(Strategy::Stay)
//!     .game_instances(20_000)
//!     .seed(42)
//!     .build()?;
//!
//! let result = trials.run()?;
//! assert!((result.car_ratio() - 1.0 / 3.0).abs() < 0.02);
//! # Ok::<(), monty_hall::trials::TrialsError>(())
//! ```

mod builder;
mod config;
mod error;
mod result;
mod runner;
mod sweep;

pub use builder::TrialsBuilder;
pub use config::TrialsConfig;
pub use error::{Result, TrialsError};
pub use result::{RATIO_EPSILON, SimulationResult};
pub use runner::{MontyHallTrials, run_trials};
pub use sweep::sweep_reveal_counts;
