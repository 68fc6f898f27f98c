use super::step::StepEngine;
use crate::core::grid::Grid;

/// The current/next grid pair.
///
/// Both grids are allocated once. Advancing computes the next generation into
/// the idle buffer and then flips `current`, so the grids trade roles without
/// ever being copied.
#[derive(Debug, Clone)]
pub struct DoubleBuffer<const W: usize, const H: usize> {
    buffers: [Grid<W, H>; 2],
    current: usize,
    generation: u64,
}

impl<const W: usize, const H: usize> DoubleBuffer<W, H> {
    pub fn new(initial: Grid<W, H>) -> Self {
        Self {
            buffers: [initial, Grid::new()],
            current: 0,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid<W, H> {
        &self.buffers[self.current]
    }

    /// Number of steps applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn advance(&mut self, engine: &StepEngine) {
        let (current, next) = self.split();
        engine.step(current, next);
        self.current ^= 1;
        self.generation += 1;
    }

    pub fn into_current(self) -> Grid<W, H> {
        let [first, second] = self.buffers;
        if self.current == 0 { first } else { second }
    }

    fn split(&mut self) -> (&Grid<W, H>, &mut Grid<W, H>) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }
}
