/// Errors raised while building a game configuration.
mod errors;
/// Export `GameConfigError`
pub use self::errors::GameConfigError;

/// The two contestant strategies.
mod strategy;
/// Export `Strategy`
pub use self::strategy::Strategy;

/// Validated door and reveal counts.
mod config;
/// Export `GameConfig`
pub use self::config::GameConfig;

/// Module that plays one game from start to finish.
mod simulator;
/// Export the game entry points and the per game trace.
pub use self::simulator::{GameOutcome, GameRecord, play_game, simulate_game};
