//! Fatal error kinds. Every variant ends the run with exit status 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Password length must be >= 4 to ensure diversity!")]
    InvalidLength,

    #[error("Memory allocation failed!")]
    Allocation,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
