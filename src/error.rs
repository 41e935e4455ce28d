//! Error types for the Mega-Sena checker

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    /// Wrong number of bet arguments on the command line
    #[error("Expected 6 numbers, got {0}")]
    InvalidArgumentCount(usize),

    /// A bet value that is not an integer
    #[error("Invalid number: {0}. Numbers must be integers.")]
    InvalidNumberFormat(String),

    /// A bet value outside 1..=60
    #[error("Invalid number: {0}. Numbers must be between 1 and 60.")]
    InvalidBetRange(String),

    #[error("All 6 numbers must be different.")]
    DuplicateBetNumbers,

    /// Bet handed to the matcher with the wrong length
    #[error("Bet must contain exactly 6 numbers (got {0})")]
    InvalidBetSize(usize),

    /// The draw archive could not be read
    #[error("Failed to read draw archive {path:?}: {source}")]
    ArchiveIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CheckerError {
    /// True for mistakes in the bet itself, as opposed to environment problems.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            CheckerError::ArchiveIo { .. } | CheckerError::InvalidConfig(_)
        )
    }
}

pub type CheckerResult<T> = Result<T, CheckerError>;
