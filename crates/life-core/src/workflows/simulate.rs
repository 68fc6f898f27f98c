use crate::core::grid::Grid;
use crate::core::render::TextRenderer;
use crate::engine::buffers::DoubleBuffer;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::step::StepEngine;
use std::io::Write;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct SimulationSummary<const W: usize, const H: usize> {
    pub generations: u64,
    pub final_population: usize,
    pub final_grid: Grid<W, H>,
}

/// Runs `config.iterations` generations starting from `initial`.
///
/// Writes a frame for the initial grid (`Step 0`) and one for every generation
/// computed after it, so `iterations + 1` frames in total. Each frame is
/// written only after the step producing it has fully completed.
#[instrument(skip_all, name = "simulation_workflow", fields(iterations = config.iterations))]
pub fn run<const W: usize, const H: usize>(
    initial: Grid<W, H>,
    config: &SimulationConfig,
    reporter: &ProgressReporter,
    out: &mut impl Write,
) -> Result<SimulationSummary<W, H>, EngineError> {
    let engine = StepEngine::new(config.strategy);
    let renderer = TextRenderer::new(config.glyphs);
    info!(
        "Simulating {} generation(s) on a {}x{} board with {:?} strategy.",
        config.iterations,
        initial.width(),
        initial.height(),
        engine.strategy()
    );

    reporter.report(Progress::RunStart {
        total_generations: config.iterations,
    });

    let mut buffers = DoubleBuffer::new(initial);
    renderer.render_frame(0, buffers.current(), out)?;

    let mut extinct_reported = false;
    for _ in 0..config.iterations {
        buffers.advance(&engine);

        let generation = buffers.generation();
        let population = buffers.current().population();
        renderer.render_frame(generation, buffers.current(), out)?;

        debug!("Generation {} has {} live cell(s).", generation, population);
        reporter.report(Progress::Generation {
            generation,
            population,
        });

        if population == 0 && !extinct_reported {
            reporter.report(Progress::Message(format!(
                "Population died out at generation {}.",
                generation
            )));
            extinct_reported = true;
        }
    }
    out.flush()?;

    reporter.report(Progress::RunFinish);

    let generations = buffers.generation();
    let final_grid = buffers.into_current();
    let final_population = final_grid.population();
    info!(
        "Simulation finished after {} generation(s) with {} live cell(s).",
        generations, final_population
    );

    Ok(SimulationSummary {
        generations,
        final_population,
        final_grid,
    })
}
