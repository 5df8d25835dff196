mod amount;
mod errors;

pub use amount::Amount;
pub use errors::AmountError;

pub type RowNumber = u64;
