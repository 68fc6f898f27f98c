use super::CellCoord;
use super::error::BoardError;
use super::traits::BoardFormat;
use crate::core::grid::Grid;
use itertools::Itertools;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// How malformed input in a coordinate list is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Stop at the first value that does not parse, or at bytes that are not
    /// UTF-8, and keep every pair read so far.
    #[default]
    Lenient,
    /// Report the first malformed token or dangling coordinate as an error.
    Strict,
}

/// A plain list of live cells: whitespace-separated `x y` integer pairs.
///
/// Values form a single stream across lines, so a line may hold any number of
/// pairs. Each value is the leading integer of what remains of a token, which
/// means `2x` yields `2` and leaves `x` as the next thing to read. Example:
///
/// ```text
/// 5 4
/// 5 5 6 5
/// 5 6
/// 6 6
/// ```
pub struct CoordinateList;

/// Splits an optionally signed run of ASCII digits off the front of `token`.
fn split_leading_integer(token: &str) -> Option<(i64, &str)> {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    let value = token[..end].parse().ok()?;
    Some((value, &token[end..]))
}

enum Scan {
    Continue,
    Stop,
}

struct PairReader {
    mode: ParseMode,
    cells: Vec<CellCoord>,
    pending_x: Option<(i64, usize)>,
}

impl PairReader {
    fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            cells: Vec::new(),
            pending_x: None,
        }
    }

    fn feed(&mut self, text: &str, line: usize) -> Result<Scan, BoardError> {
        for token in text.split_whitespace() {
            let mut rest = token;
            while !rest.is_empty() {
                let Some((value, tail)) = split_leading_integer(rest) else {
                    return match self.mode {
                        ParseMode::Lenient => {
                            debug!(
                                "Stopping board parse at line {} on '{}' ({} cell(s) read).",
                                line,
                                rest,
                                self.cells.len()
                            );
                            Ok(Scan::Stop)
                        }
                        ParseMode::Strict => Err(BoardError::Parse {
                            line,
                            token: rest.to_string(),
                        }),
                    };
                };
                rest = tail;

                match self.pending_x.take() {
                    Some((x, _)) => {
                        trace!("Read cell ({}, {}) on line {}", x, value, line);
                        self.cells.push((x, value));
                    }
                    None => self.pending_x = Some((value, line)),
                }
            }
        }
        Ok(Scan::Continue)
    }

    fn finish(self) -> Result<Vec<CellCoord>, BoardError> {
        if let Some((_, line)) = self.pending_x {
            if self.mode == ParseMode::Strict {
                return Err(BoardError::DanglingCoordinate { line });
            }
            debug!("Ignoring dangling coordinate on line {}.", line);
        }
        Ok(self.cells)
    }
}

impl BoardFormat for CoordinateList {
    type Options = ParseMode;
    type Error = BoardError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Vec<CellCoord>, Self::Error> {
        let mut pairs = PairReader::new(*options);
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_num += 1;

            let (text, truncated) = match std::str::from_utf8(&buf) {
                Ok(text) => (text, false),
                Err(e) => {
                    if *options == ParseMode::Strict {
                        return Err(BoardError::InvalidEncoding { line: line_num });
                    }
                    let valid = std::str::from_utf8(&buf[..e.valid_up_to()]).unwrap_or_default();
                    (valid, true)
                }
            };

            if let Scan::Stop = pairs.feed(text, line_num)? {
                return Ok(pairs.cells);
            }
            if truncated {
                debug!("Stopping board parse at invalid UTF-8 on line {}.", line_num);
                return Ok(pairs.cells);
            }
        }

        pairs.finish()
    }

    fn write_to<const W: usize, const H: usize>(
        grid: &Grid<W, H>,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let body = grid
            .live_cells()
            .map(|(x, y)| format!("{} {}", x, y))
            .join("\n");
        if !body.is_empty() {
            writeln!(writer, "{}", body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(src: &str, mode: ParseMode) -> Result<Vec<CellCoord>, BoardError> {
        CoordinateList::read_from(&mut Cursor::new(src), &mode)
    }

    #[test]
    fn reads_one_pair_per_line() {
        let cells = read("5 4\n5 5\n6 5\n", ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(5, 4), (5, 5), (6, 5)]);
    }

    #[test]
    fn reads_several_pairs_on_one_line() {
        let cells = read("5 4 5 5\n  6\t5  \n", ParseMode::Strict).unwrap();
        assert_eq!(cells, vec![(5, 4), (5, 5), (6, 5)]);
    }

    #[test]
    fn empty_input_yields_no_cells() {
        assert!(read("", ParseMode::Strict).unwrap().is_empty());
        assert!(read("\n   \n", ParseMode::Lenient).unwrap().is_empty());
    }

    #[test]
    fn negative_and_large_coordinates_are_passed_through() {
        let cells = read("-1 3\n100 200\n", ParseMode::Strict).unwrap();
        assert_eq!(cells, vec![(-1, 3), (100, 200)]);
    }

    #[test]
    fn lenient_mode_stops_at_first_malformed_token() {
        let cells = read("1 2\n3 x\n4 5\n", ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(1, 2)]);
    }

    #[test]
    fn lenient_mode_drops_dangling_coordinate() {
        let cells = read("1 2\n3\n", ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(1, 2)]);
    }

    #[test]
    fn strict_mode_reports_malformed_token_with_line() {
        let err = read("1 2\n3 x\n", ParseMode::Strict).unwrap_err();
        match err {
            BoardError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn strict_mode_reports_dangling_coordinate() {
        let err = read("1 2\n\n3\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, BoardError::DanglingCoordinate { line: 3 }));
    }

    #[test]
    fn integer_prefix_of_a_token_is_read() {
        let cells = read("1 2x\n3 4\n", ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(1, 2)]);

        let cells = read("7-8 9+1\n", ParseMode::Strict).unwrap();
        assert_eq!(cells, vec![(7, -8), (9, 1)]);
    }

    #[test]
    fn strict_mode_reports_trailing_garbage_after_an_integer() {
        let err = read("1 2x\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, BoardError::Parse { line: 1, ref token } if token == "x"));
    }

    #[test]
    fn overflowing_integer_is_a_malformed_token() {
        let cells = read("1 2 99999999999999999999 3\n", ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(1, 2)]);
    }

    #[test]
    fn lenient_mode_stops_at_invalid_utf8() {
        let mut src: &[u8] = b"1 2\n3 4\n\xff\xfe\n5 5\n";
        let cells = CoordinateList::read_from(&mut src, &ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn lenient_mode_keeps_pairs_before_invalid_bytes_on_the_same_line() {
        let mut src: &[u8] = b"1 2 3 4\xff 5 5\n";
        let cells = CoordinateList::read_from(&mut src, &ParseMode::Lenient).unwrap();
        assert_eq!(cells, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn strict_mode_reports_invalid_utf8_line() {
        let mut src: &[u8] = b"1 2\n\xff\n";
        let err = CoordinateList::read_from(&mut src, &ParseMode::Strict).unwrap_err();
        assert!(matches!(err, BoardError::InvalidEncoding { line: 2 }));
    }

    #[test]
    fn write_to_lists_live_cells_row_major() {
        let mut grid = Grid::<4, 4>::new();
        grid.set_alive(2, 1).unwrap();
        grid.set_alive(0, 3).unwrap();
        grid.set_alive(3, 1).unwrap();

        let mut out = Vec::new();
        CoordinateList::write_to(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 1\n3 1\n0 3\n");
    }

    #[test]
    fn write_to_empty_grid_writes_nothing() {
        let grid = Grid::<2, 2>::new();
        let mut out = Vec::new();
        CoordinateList::write_to(&grid, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn path_round_trip_preserves_live_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");

        let mut grid = Grid::<5, 5>::new();
        grid.set_alive(1, 0).unwrap();
        grid.set_alive(4, 4).unwrap();
        CoordinateList::write_to_path(&grid, &path).unwrap();

        let cells = CoordinateList::read_from_path(&path, &ParseMode::Strict).unwrap();
        assert_eq!(cells, vec![(1, 0), (4, 4)]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoordinateList::read_from_path(dir.path().join("nope.txt"), &ParseMode::Lenient)
            .unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }
}
