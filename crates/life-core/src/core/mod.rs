//! # Core Module
//!
//! Stateless building blocks of the simulation: the padded board itself, the
//! built-in seed pattern, text rendering, and board file I/O.
//!
//! ## Architecture
//!
//! - **Board Representation** ([`grid`]) - Fixed-extent grid with a dead ghost ring
//! - **Seed Patterns** ([`patterns`]) - The built-in initial generation
//! - **Rendering** ([`render`]) - ASCII frames for each generation
//! - **File I/O** ([`io`]) - Coordinate-list loading with explicit bounds policy

pub mod grid;
pub mod io;
pub mod patterns;
pub mod render;
