mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::config::PartialRunConfig;
use crate::error::{CliError, Result, parse_exit_code};
use clap::Parser;
use std::io::{self, BufWriter};
use tracing::{debug, error, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };

    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("life v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let partial = match &cli.config {
        Some(path) => PartialRunConfig::from_file(path)?,
        None => PartialRunConfig::default(),
    };
    let app_config = partial.merge_with_cli(&cli)?;
    debug!("Resolved configuration: {:?}", app_config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = commands::run::run(app_config, &mut out);

    match &result {
        Ok(_) => info!("Simulation completed successfully."),
        Err(e) => error!("Simulation failed: {}", e),
    }

    result
}
