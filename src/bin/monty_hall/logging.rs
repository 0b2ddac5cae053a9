//! Logging setup for the command line.
//!
//! Logs go to stderr so that stdout only carries the simulation result.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// CLI arguments for controlling tracing/logging output.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all log output except errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format: compact, pretty, or json
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

/// Available log output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line format (default)
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
}

impl TracingArgs {
    /// The filter directive the flags ask for.
    ///
    /// Without flags only warnings are shown, so a plain run prints
    /// nothing but the result.
    pub fn level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbosity {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` wins over the verbosity flags when it is set.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.level())
        };

        let registry = tracing_subscriber::registry().with(filter);
        match self.log_format {
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbosity: u8, quiet: bool) -> TracingArgs {
        TracingArgs {
            verbosity,
            quiet,
            log_format: LogFormat::Compact,
        }
    }

    #[test]
    fn test_levels() {
        assert_eq!(args(0, false).level(), "warn");
        assert_eq!(args(1, false).level(), "info");
        assert_eq!(args(2, false).level(), "debug");
        assert_eq!(args(5, false).level(), "trace");
        assert_eq!(args(3, true).level(), "error");
    }
}
