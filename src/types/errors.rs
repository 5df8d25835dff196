use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: Overflow")]
    Overflow,
    #[error("Amount error: {0}")]
    ParseInt(#[from] ParseIntError)
}
