//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("stellar CLI error: {0}")]
    Cli(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Verification error: {0}")]
    Verification(String),
}

pub type Result<T> = std::result::Result<T, DeployError>;
