//! # lifegrid Core Library
//!
//! A fixed-extent Conway's Game of Life engine built around a ghost-cell padded
//! board, a double-buffered step function and a data-parallel update kernel.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** The padded [`Grid`](core::grid::Grid), the
//!   built-in seed, text rendering and board file I/O.
//!
//! - **[`engine`]: The Logic Core.** The transition rule, the
//!   [`StepEngine`](engine::step::StepEngine) with its sequential and parallel
//!   strategies, and the [`DoubleBuffer`](engine::buffers::DoubleBuffer) that swaps
//!   grid roles between generations.
//!
//! - **[`workflows`]: The Public API.** Runs a complete simulation, writing one
//!   ASCII frame per generation.
//!
//! ## Features
//!
//! - `parallel` (default): dispatch the step kernel over rayon's thread pool.

pub mod core;
pub mod engine;
pub mod workflows;
