use itertools::Itertools;
use thiserror::Error;

/// Logical width of the default board.
pub const GRID_WIDTH: usize = 10;
/// Logical height of the default board.
pub const GRID_HEIGHT: usize = 10;
/// Width of the always-dead border surrounding the logical board.
pub const GHOST: usize = 1;

/// The default-extent board used by the CLI.
pub type Board = Grid<GRID_WIDTH, GRID_HEIGHT>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Cell ({x}, {y}) lies outside the {width}x{height} board")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
}

/// Glyphs used when a grid is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '0',
            dead: '.',
        }
    }
}

/// A `W` x `H` Game of Life board padded with a one-cell ghost ring.
///
/// Storage is a single row-major slice of `(W + 2) * (H + 2)` cells. Logical
/// cell `(x, y)` lives at storage coordinate `(x + 1, y + 1)`; every cell on
/// storage row/column `0` or `extent - 1` is a ghost and stays dead for the
/// lifetime of the grid. This lets the step kernel read all eight neighbours
/// of any interior cell without bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const W: usize = GRID_WIDTH, const H: usize = GRID_HEIGHT> {
    cells: Vec<bool>,
}

impl<const W: usize, const H: usize> Default for Grid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Grid<W, H> {
    /// Number of storage columns, ghost ring included.
    pub const STRIDE: usize = W + 2 * GHOST;
    /// Number of storage rows, ghost ring included.
    pub const ROWS: usize = H + 2 * GHOST;

    pub fn new() -> Self {
        Self {
            cells: vec![false; Self::STRIDE * Self::ROWS],
        }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    pub fn stride(&self) -> usize {
        Self::STRIDE
    }

    /// Whether a raw (possibly negative) coordinate lies on the logical board.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < W as u64 && (y as u64) < H as u64
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        if x >= W || y >= H {
            return Err(GridError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: W,
                height: H,
            });
        }
        let index = Self::index(x + GHOST, y + GHOST);
        self.cells[index] = alive;
        Ok(())
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.set(x, y, true)
    }

    /// Logical cell state. Anything off the logical board reports dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        if x >= W || y >= H {
            return false;
        }
        self.cells[Self::index(x + GHOST, y + GHOST)]
    }

    #[inline]
    pub(crate) fn index(ix: usize, iy: usize) -> usize {
        iy * Self::STRIDE + ix
    }

    /// Storage-coordinate read; ghost cells included.
    #[inline]
    pub(crate) fn cell(&self, ix: usize, iy: usize) -> bool {
        self.cells[Self::index(ix, iy)]
    }

    pub(crate) fn storage(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn storage_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn ghost_ring_is_dead(&self) -> bool {
        let last_col = Self::STRIDE - 1;
        let last_row = Self::ROWS - 1;
        (0..Self::ROWS)
            .cartesian_product(0..Self::STRIDE)
            .filter(|&(iy, ix)| iy == 0 || iy == last_row || ix == 0 || ix == last_col)
            .all(|(iy, ix)| !self.cell(ix, iy))
    }

    /// Live logical cells in row-major order, as `(x, y)`.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..H)
            .cartesian_product(0..W)
            .filter(|&(y, x)| self.is_alive(x, y))
            .map(|(y, x)| (x, y))
    }

    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    pub fn to_text(&self) -> impl Iterator<Item = String> + '_ {
        self.to_text_with(Glyphs::default())
    }

    /// One string per logical row; ghost cells are never emitted.
    pub fn to_text_with(&self, glyphs: Glyphs) -> impl Iterator<Item = String> + '_ {
        (0..H).map(move |y| {
            (0..W)
                .map(|x| {
                    if self.is_alive(x, y) {
                        glyphs.alive
                    } else {
                        glyphs.dead
                    }
                })
                .collect()
        })
    }
}
