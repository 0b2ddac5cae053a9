mod args;
mod logging;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use monty_hall::game::GameConfig;
use monty_hall::trials::{SimulationResult, TrialsBuilder, TrialsError, sweep_reveal_counts};

use args::{Cli, CliError, OutputFormat, Request, RunArgs};

/// A result with its derived ratios, for JSON output.
#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a SimulationResult,
    car_ratio: f64,
    goat_ratio: f64,
    theoretical_car_ratio: f64,
}

impl<'a> From<&'a SimulationResult> for Report<'a> {
    fn from(result: &'a SimulationResult) -> Self {
        Self {
            result,
            car_ratio: result.car_ratio(),
            goat_ratio: result.goat_ratio(),
            theoretical_car_ratio: result.theoretical_car_ratio(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.tracing.init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_usage() => {
            eprintln!(
                "Your command line arguments are incorrect. This is probably the issue:\n{err}\n\
                 If this error does not describe your problem, type \"monty_hall Help\" for a detailed description of what is needed to run."
            );
            ExitCode::from(2)
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let run_args = match Request::from_positionals(&cli.positionals, cli.sweep)? {
        Request::Help => {
            Cli::command().print_long_help()?;
            return Ok(());
        }
        Request::Run(run_args) => run_args,
    };

    if cli.sweep {
        run_sweep(cli, &run_args)
    } else {
        run_single(cli, &run_args)
    }
}

fn run_single(cli: &Cli, run_args: &RunArgs) -> Result<(), CliError> {
    let trials = TrialsBuilder::from(run_args.game)
        .game_instances(run_args.game_instances)
        .seed(cli.seed)
        .threads(cli.threads)
        .build()?;

    if cli.tracing.verbosity > 0 {
        eprint!("{}", trials.configuration_summary());
    }

    let result = trials.run()?;
    print!("{}", render_single(cli.format, &result)?);
    Ok(())
}

fn run_sweep(cli: &Cli, run_args: &RunArgs) -> Result<(), CliError> {
    if cli.threads == 0 {
        return Err(TrialsError::NoWorkers.into());
    }

    let game: &GameConfig = &run_args.game;
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let results = sweep_reveal_counts(
        game.door_count(),
        game.strategy(),
        run_args.game_instances,
        &mut rng,
    )?;

    print!("{}", render_sweep(cli.format, game, &results)?);
    Ok(())
}

fn render_single(format: OutputFormat, result: &SimulationResult) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Ratio => format!("{}\n", result.car_ratio()),
        OutputFormat::Markdown => result.to_markdown(),
        OutputFormat::Json => {
            format!("{}\n", serde_json::to_string_pretty(&Report::from(result))?)
        }
    })
}

fn render_sweep(
    format: OutputFormat,
    game: &GameConfig,
    results: &[SimulationResult],
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Ratio => results
            .iter()
            .map(|result| format!("{}\t{}\n", result.config().reveal_count(), result.car_ratio()))
            .collect(),
        OutputFormat::Markdown => sweep_markdown(game, results),
        OutputFormat::Json => {
            let reports: Vec<Report<'_>> = results.iter().map(Report::from).collect();
            format!("{}\n", serde_json::to_string_pretty(&reports)?)
        }
    })
}

fn sweep_markdown(game: &GameConfig, results: &[SimulationResult]) -> String {
    let mut output = String::new();
    output.push_str("# Monty Hall Reveal Sweep\n\n");
    output.push_str(&format!(
        "- **Doors**: {}\n- **Strategy**: {}\n\n",
        game.door_count(),
        game.strategy()
    ));
    output.push_str("| Doors Revealed | Games | Car Ratio | Theoretical |\n");
    output.push_str("|----------------|-------|-----------|-------------|\n");
    for result in results {
        output.push_str(&format!(
            "| {} | {} | {:.4} | {:.4} |\n",
            result.config().reveal_count(),
            result.game_instances(),
            result.car_ratio(),
            result.theoretical_car_ratio()
        ));
    }
    output
}
