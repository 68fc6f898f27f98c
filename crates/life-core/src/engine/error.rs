use super::config::ConfigError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to write generation output: {0}")]
    Output(#[from] io::Error),

    #[error("Invalid simulation configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
