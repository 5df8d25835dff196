mod bank;
mod encoded;
mod errors;
mod transfer;

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use bank::{Bank, BankDirectory};
pub use encoded::EncodedRow;
pub use errors::{DirectoryError, FormatError};
pub use transfer::TransferRequest;

/// Point of initiation method: whether a scanning wallet should treat the code
/// as single use (`Dynamic`) or reusable (`Static`).
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PaymentFormat {
    #[default]
    Dynamic,
    Static
}

impl Display for PaymentFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PaymentFormat::Dynamic => write!(formatter, "dynamic"),
            PaymentFormat::Static => write!(formatter, "static")
        }
    }
}

impl FromStr for PaymentFormat {
    type Err = FormatError;

    /// An empty cell falls back to the default, anything else must name a format.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("dynamic") {
            Ok(PaymentFormat::Dynamic)
        } else if value.eq_ignore_ascii_case("static") {
            Ok(PaymentFormat::Static)
        } else {
            Err(FormatError::Unknown(value.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for PaymentFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        PaymentFormat::from_str(&value).map_err(de::Error::custom)
    }
}
