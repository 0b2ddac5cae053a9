use thiserror::Error;

use crate::game::GameConfigError;

/// Errors that can occur while setting up or running trials
#[derive(Debug, Error)]
pub enum TrialsError {
    #[error("Invalid game configuration: {0}")]
    InvalidGame(#[from] GameConfigError),

    #[error("You must run at least one instance of the game")]
    NotEnoughGames,

    #[error("At least one worker thread is required")]
    NoWorkers,
}

/// Result type for trial operations
pub type Result<T> = std::result::Result<T, TrialsError>;
