use crate::config::AppConfig;
use crate::error::{CliError, Result};
use lifegrid::{
    core::grid::Board,
    core::io::{coords::CoordinateList, loader::BoardLoader, traits::BoardFormat},
    engine::progress::{Progress, ProgressReporter},
    workflows,
};
use std::io::Write;
use tracing::{debug, info, warn};

fn log_progress(progress: Progress) {
    match progress {
        Progress::RunStart { total_generations } => {
            info!("Starting run of {} generation(s).", total_generations);
        }
        Progress::Generation {
            generation,
            population,
        } => {
            debug!("Generation {}: population {}", generation, population);
        }
        Progress::RunFinish => {
            debug!("Run finished.");
        }
        Progress::Message(msg) => {
            info!("{}", msg);
        }
    }
}

pub fn run(config: AppConfig, out: &mut impl Write) -> Result<()> {
    let loader = BoardLoader::new(config.load_options);

    let initial: Board = match &config.board_path {
        Some(path) => loader
            .load_path(path)
            .map_err(|source| CliError::Board {
                path: path.clone(),
                source,
            })?,
        None => {
            info!("No board file given; using the built-in seed.");
            loader
                .load_default()
                .map_err(|e| CliError::Other(anyhow::anyhow!("Built-in seed is invalid: {}", e)))?
        }
    };

    let reporter = ProgressReporter::with_callback(&log_progress);

    info!("Invoking the simulation workflow...");
    let summary = workflows::simulate::run(initial, &config.simulation, &reporter, out)?;

    if summary.final_population == 0 && summary.generations > 0 {
        warn!(
            "Board is empty after {} generation(s).",
            summary.generations
        );
    }

    if let Some(path) = &config.save_path {
        info!("Saving final generation to {:?}", path);
        CoordinateList::write_to_path(&summary.final_grid, path).map_err(|e| {
            CliError::Other(anyhow::anyhow!(
                "Failed to save final generation to '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    Ok(())
}
