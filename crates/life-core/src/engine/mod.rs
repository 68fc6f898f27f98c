//! # Engine Module
//!
//! This module implements the generation update machinery: the transition rule,
//! the stencil kernel that applies it to every interior cell, and the double
//! buffer that alternates the roles of the two grids between steps.
//!
//! ## Architecture
//!
//! - **Transition Rule** ([`rule`]) - The per-cell Game of Life decision
//! - **Step Kernel** ([`step`]) - Sequential and rayon-parallel dispatch over interior rows
//! - **Double Buffering** ([`buffers`]) - Current/next pair exchanged by index
//! - **Configuration** ([`config`]) - Iteration count, execution strategy and glyphs
//! - **Progress Monitoring** ([`progress`]) - Per-generation reporting callbacks
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Execution Model
//!
//! A step reads only the current grid and writes only the interior of the next
//! grid. Rows therefore never depend on each other within a step, and the
//! parallel strategy needs no locking; the rayon call returning is the barrier
//! between one generation and the next.

pub mod buffers;
pub mod config;
pub mod error;
pub mod progress;
pub mod rule;
pub mod step;
