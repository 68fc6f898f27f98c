use super::config::ExecutionStrategy;
use super::rule::next_state;
use crate::core::grid::{GHOST, Grid};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes one generation from the previous one.
///
/// The engine only ever reads `current` and only ever writes the interior
/// cells of `next`, so every row can be computed independently and in any
/// order. The ghost ring of `next` is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepEngine {
    strategy: ExecutionStrategy,
}

impl StepEngine {
    pub fn new(strategy: ExecutionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Overwrites every interior cell of `next` with the successor of `current`.
    ///
    /// Returns once all rows are written, regardless of strategy.
    pub fn step<const W: usize, const H: usize>(&self, current: &Grid<W, H>, next: &mut Grid<W, H>) {
        match self.strategy {
            ExecutionStrategy::Sequential => step_sequential(current, next),
            ExecutionStrategy::Parallel => step_parallel(current, next),
        }
        debug_assert!(next.ghost_ring_is_dead());
    }
}

fn step_sequential<const W: usize, const H: usize>(current: &Grid<W, H>, next: &mut Grid<W, H>) {
    let stride = current.stride();
    let src = current.storage();
    next.storage_mut()
        .chunks_mut(stride)
        .enumerate()
        .skip(GHOST)
        .take(H)
        .for_each(|(iy, out_row)| step_row::<W>(src, stride, iy, out_row));
}

#[cfg(feature = "parallel")]
fn step_parallel<const W: usize, const H: usize>(current: &Grid<W, H>, next: &mut Grid<W, H>) {
    let stride = current.stride();
    let src = current.storage();
    trace!(
        "Dispatching {} rows over {} rayon threads",
        H,
        rayon::current_num_threads()
    );
    next.storage_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .skip(GHOST)
        .take(H)
        .for_each(|(iy, out_row)| step_row::<W>(src, stride, iy, out_row));
}

#[cfg(not(feature = "parallel"))]
fn step_parallel<const W: usize, const H: usize>(current: &Grid<W, H>, next: &mut Grid<W, H>) {
    trace!("Built without the `parallel` feature; stepping sequentially");
    step_sequential(current, next);
}

/// Writes the interior of storage row `iy` into `out_row`.
///
/// `src` is the full padded storage of the current generation. The rows above
/// and below always exist because `iy` is an interior row.
#[inline]
fn step_row<const W: usize>(src: &[bool], stride: usize, iy: usize, out_row: &mut [bool]) {
    let above = &src[(iy - 1) * stride..iy * stride];
    let row = &src[iy * stride..(iy + 1) * stride];
    let below = &src[(iy + 1) * stride..(iy + 2) * stride];

    for ix in GHOST..W + GHOST {
        let neighbors = above[ix - 1] as u8
            + above[ix] as u8
            + above[ix + 1] as u8
            + row[ix - 1] as u8
            + row[ix + 1] as u8
            + below[ix - 1] as u8
            + below[ix] as u8
            + below[ix + 1] as u8;
        out_row[ix] = next_state(row[ix], neighbors);
    }
}
