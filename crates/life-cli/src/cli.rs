use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Simulate Conway's Game of Life on a fixed-size board and print every generation.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Number of generations to simulate (non-negative integer)
    #[arg(value_name = "ITERATIONS", allow_negative_numbers = true)]
    pub iterations: i64,

    /// File of whitespace-separated `x y` live-cell coordinates.
    /// The built-in seed is used when omitted.
    #[arg(value_name = "BOARDFILE")]
    pub board: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How the step kernel is dispatched, overriding the config file
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<StrategyArg>,

    /// Treat malformed board file contents as an error instead of stopping early
    #[arg(long)]
    pub strict: bool,

    /// Skip board cells that fall outside the grid instead of failing
    #[arg(long)]
    pub ignore_out_of_bounds: bool,

    /// Write the final generation to this file as a coordinate list
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel stepping.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Sequential,
    Parallel,
}
