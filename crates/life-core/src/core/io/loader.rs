use super::CellCoord;
use super::coords::{CoordinateList, ParseMode};
use super::error::BoardError;
use super::traits::BoardFormat;
use crate::core::grid::Grid;
use crate::core::patterns::DEFAULT_SEED;
use std::path::Path;
use tracing::{info, warn};

/// What to do with a loaded coordinate that falls off the logical board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoundsPolicy {
    /// Fail the load with [`BoardError::OutOfBounds`].
    #[default]
    Reject,
    /// Skip the coordinate and log a warning.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub parse_mode: ParseMode,
    pub out_of_bounds: OutOfBoundsPolicy,
}

/// Builds the initial generation for a simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardLoader {
    options: LoadOptions,
}

impl BoardLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Reads a coordinate-list file and places its cells on a fresh grid.
    pub fn load_path<const W: usize, const H: usize>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Grid<W, H>, BoardError> {
        let path = path.as_ref();
        info!("Loading board from {:?}", path);
        let cells = CoordinateList::read_from_path(path, &self.options.parse_mode)?;
        let mut grid = Grid::new();
        let placed = self.populate(&mut grid, &cells)?;
        info!("Placed {} live cell(s) from {:?}", placed, path);
        Ok(grid)
    }

    /// The built-in seed, used when no board file is supplied.
    pub fn load_default<const W: usize, const H: usize>(&self) -> Result<Grid<W, H>, BoardError> {
        let cells: Vec<CellCoord> = DEFAULT_SEED
            .iter()
            .map(|&(x, y)| (x as i64, y as i64))
            .collect();
        let mut grid = Grid::new();
        self.populate(&mut grid, &cells)?;
        Ok(grid)
    }

    /// Marks every coordinate in `cells` alive on `grid`, applying the
    /// out-of-bounds policy. Returns the number of cells placed.
    pub fn populate<const W: usize, const H: usize>(
        &self,
        grid: &mut Grid<W, H>,
        cells: &[CellCoord],
    ) -> Result<usize, BoardError> {
        let mut placed = 0;
        for &(x, y) in cells {
            if !grid.contains(x, y) {
                match self.options.out_of_bounds {
                    OutOfBoundsPolicy::Reject => {
                        return Err(BoardError::OutOfBounds {
                            x,
                            y,
                            width: W,
                            height: H,
                        });
                    }
                    OutOfBoundsPolicy::Ignore => {
                        warn!("Ignoring cell ({}, {}) outside the {}x{} board.", x, y, W, H);
                        continue;
                    }
                }
            }
            grid.set_alive(x as usize, y as usize)
                .map_err(|_| BoardError::OutOfBounds {
                    x,
                    y,
                    width: W,
                    height: H,
                })?;
            placed += 1;
        }
        Ok(placed)
    }
}
