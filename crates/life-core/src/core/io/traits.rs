use super::CellCoord;
use crate::core::grid::Grid;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing board file formats.
///
/// Implementors parse a file into raw cell coordinates and serialize the live
/// cells of a grid back out. Bounds validation is left to the loader so that a
/// format never has to know the board extent.
pub trait BoardFormat {
    /// Format-specific parsing options.
    type Options;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads raw live-cell coordinates from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the options demand strict parsing
    /// and the input is malformed.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Vec<CellCoord>, Self::Error>;

    /// Writes the live cells of `grid` to a writer.
    fn write_to<const W: usize, const H: usize>(
        grid: &Grid<W, H>,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads raw live-cell coordinates from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::Options,
    ) -> Result<Vec<CellCoord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }

    /// Writes the live cells of `grid` to a file path, replacing any existing file.
    fn write_to_path<P: AsRef<Path>, const W: usize, const H: usize>(
        grid: &Grid<W, H>,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(grid, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
