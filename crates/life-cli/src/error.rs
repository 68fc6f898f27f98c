use clap::error::ErrorKind;
use lifegrid::core::io::error::BoardError;
use lifegrid::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit status for bad arguments or configuration.
pub const EXIT_INVALID_ARGUMENTS: i32 = 1;
/// Exit status when the board file cannot be used.
pub const EXIT_BOARD_FILE: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to load board file '{path}': {source}", path = path.display())]
    Board {
        path: PathBuf,
        #[source]
        source: BoardError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Board { .. } => EXIT_BOARD_FILE,
            _ => EXIT_INVALID_ARGUMENTS,
        }
    }
}

/// Exit status for a failed command-line parse. Help and version requests
/// succeed; every other clap error counts as a bad argument.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_INVALID_ARGUMENTS,
    }
}
