use std::io;

use thiserror::Error;

/// Why a string could not be parsed as a [`BigInt`](crate::BigInt).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("sign character is not followed by any digits")]
    MissingDigits,
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}

#[derive(Debug, Error)]
pub enum ReadBigIntError {
    #[error("failed to read integer token: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseBigIntError),
}
