use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum GameConfigError {
    #[error("You must have at least three doors to choose from, got {door_count}")]
    NotEnoughDoors { door_count: usize },

    #[error(
        "You cannot reveal {reveal_count} doors; with {door_count} doors at most {max_reveal} can be revealed"
    )]
    TooManyRevealed {
        reveal_count: usize,
        door_count: usize,
        max_reveal: usize,
    },

    #[error("You must reveal at least one door per game")]
    NotEnoughRevealed,

    #[error("Unknown strategy {0:?}; use either \"Switch\" or \"Stay\", case sensitive")]
    UnknownStrategy(String),
}
