use clap::{Parser, ValueEnum};
use thiserror::Error;

use monty_hall::game::{GameConfig, GameConfigError, Strategy};
use monty_hall::trials::TrialsError;

use crate::logging::TracingArgs;

/// Seed used when none is given, so repeated runs print the same ratio.
pub const DEFAULT_SEED: u64 = 42;

/// Door count used when only games and strategy are given.
pub const DEFAULT_DOORS: i64 = 3;

/// Reveal count used when it is left off.
pub const DEFAULT_REVEALED: i64 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "monty_hall",
    version,
    about = "Estimate the odds of winning the Monty Hall game by simulation",
    long_about = "Estimate the odds of winning the Monty Hall game by simulation.\n\n\
                  The syntax is \"monty_hall [numDoors] [doorsRevealed] [gameInstances] [switchStrategy]\", where:\n\
                  - [numDoors] is the number of doors in each game, written as an integer. If left off, this will default to 3.\n\
                  - [doorsRevealed] is the number of doors to reveal in each game, written as an integer. If left off, this will default to 1.\n\
                  - [gameInstances] is the number of games to try and run, written as an integer.\n\
                  - [switchStrategy] is the strategy to use, written as \"Switch\" or \"Stay\", case sensitive.\n\n\
                  The ratio of games that ended with the car is printed to stdout.",
    override_usage = "monty_hall [OPTIONS] [numDoors] [doorsRevealed] <gameInstances> <Switch|Stay>\n       monty_hall Help"
)]
pub struct Cli {
    /// Tracing/logging options
    #[command(flatten)]
    pub tracing: TracingArgs,

    /// [numDoors] [doorsRevealed] <gameInstances> <Switch|Stay>, or Help
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub positionals: Vec<String>,

    /// Seed for the random number generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of worker threads to split the games across
    ///
    /// A sweep always plays on one thread but still rejects zero.
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Ratio)]
    pub format: OutputFormat,

    /// Run every legal reveal count for the door count instead of one
    #[arg(long)]
    pub sweep: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Just the car ratio
    #[default]
    Ratio,
    /// A Markdown report
    Markdown,
    /// JSON for machine parsing
    Json,
}

/// What the positional arguments asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Help,
    Run(RunArgs),
}

/// Validated positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub game: GameConfig,
    pub game_instances: usize,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("You do not have the right amount of items displayed.")]
    WrongArgumentCount,

    #[error("{name} must be written as an integer, got {value:?}.")]
    NotAnInteger { name: &'static str, value: String },

    #[error("{0}.")]
    Game(#[from] GameConfigError),

    #[error("{0}.")]
    Trials(TrialsError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl From<TrialsError> for CliError {
    fn from(err: TrialsError) -> Self {
        match err {
            TrialsError::InvalidGame(game) => CliError::Game(game),
            other => CliError::Trials(other),
        }
    }
}

impl CliError {
    /// Errors caused by the arguments, as opposed to failures while running.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::WrongArgumentCount
                | CliError::NotAnInteger { .. }
                | CliError::Game(_)
                | CliError::Trials(TrialsError::NotEnoughGames | TrialsError::NoWorkers)
        )
    }
}

impl Request {
    /// Map the positional arguments onto a request.
    ///
    /// - `Help`: print the help text
    /// - `games strategy`: three doors, one revealed
    /// - `doors games strategy`: one revealed
    /// - `doors revealed games strategy`
    ///
    /// With `sweep` set the reveal count is only checked for being an
    /// integer; every legal reveal count gets played anyway.
    ///
    /// Checks run in a fixed order: doors, reveals, games, then strategy.
    pub fn from_positionals(positionals: &[String], sweep: bool) -> Result<Self, CliError> {
        let (doors, revealed, games, strategy) = match positionals {
            [help] if help == "Help" => return Ok(Request::Help),
            [games, strategy] => (DEFAULT_DOORS, DEFAULT_REVEALED, games, strategy),
            [doors, games, strategy] => (
                parse_integer("numDoors", doors)?,
                DEFAULT_REVEALED,
                games,
                strategy,
            ),
            [doors, revealed, games, strategy] => (
                parse_integer("numDoors", doors)?,
                parse_integer("doorsRevealed", revealed)?,
                games,
                strategy,
            ),
            _ => return Err(CliError::WrongArgumentCount),
        };
        let games = parse_integer("gameInstances", games)?;

        let door_count = non_negative(doors);
        let reveal_count = if sweep {
            DEFAULT_REVEALED as usize
        } else {
            non_negative(revealed)
        };
        GameConfig::validate_counts(door_count, reveal_count)?;

        let game_instances = non_negative(games);
        if game_instances == 0 {
            return Err(TrialsError::NotEnoughGames.into());
        }

        let strategy = strategy.parse::<Strategy>()?;
        let game = GameConfig::new(door_count, reveal_count, strategy)?;

        Ok(Request::Run(RunArgs {
            game,
            game_instances,
        }))
    }
}

fn parse_integer(name: &'static str, value: &str) -> Result<i64, CliError> {
    value.parse::<i64>().map_err(|_| CliError::NotAnInteger {
        name,
        value: value.to_string(),
    })
}

/// Negative counts are as invalid as zero; clamp so validation reports them.
fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}
