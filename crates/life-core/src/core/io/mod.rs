//! Board loading and saving.
//!
//! Initial generations come either from the built-in seed or from a
//! coordinate-list file. The [`traits::BoardFormat`] trait describes a file
//! format; [`loader::BoardLoader`] turns parsed coordinates into a populated
//! grid while enforcing an explicit out-of-bounds policy.

pub mod coords;
pub mod error;
pub mod loader;
pub mod traits;

/// A raw `(x, y)` coordinate as read from a board file, before bounds checks.
pub type CellCoord = (i64, i64);
