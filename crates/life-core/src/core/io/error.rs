use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error on line {line}: '{token}' is not an integer coordinate")]
    Parse { line: usize, token: String },

    #[error("Line {line} is not valid UTF-8")]
    InvalidEncoding { line: usize },

    #[error("Line {line} ends with an x coordinate that has no matching y")]
    DanglingCoordinate { line: usize },

    #[error("Cell ({x}, {y}) lies outside the {width}x{height} board")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
}
