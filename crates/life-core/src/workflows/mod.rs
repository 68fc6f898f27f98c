//! # Workflows Module
//!
//! High-level entry points that tie the [`core`](crate::core) and
//! [`engine`](crate::engine) layers together.
//!
//! - **Simulation Workflow** ([`simulate`]) - Render, step and swap for a fixed
//!   number of generations.

pub mod simulate;
