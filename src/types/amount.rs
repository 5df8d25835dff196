use crate::types::errors::AmountError;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;
use std::str::FromStr;

/// A transfer amount in whole currency units (VND has no minor unit).
///
/// Zero means "amount not fixed" and is left out of the payload entirely.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(u64);

impl Amount {
    pub fn new(value: u64) -> Self {
        Amount(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses amount text as typed by a user, e.g. `"20,000"` or `"20.000 đ"`.
    ///
    /// Every non-digit character is discarded, so grouping separators in any
    /// locale collapse into the plain integer. Text without digits is zero.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Ok(Amount(0));
        }

        digits.parse::<u64>().map(Amount).map_err(|error| match error.kind() {
            IntErrorKind::PosOverflow => AmountError::Overflow,
            _ => AmountError::ParseInt(error)
        })
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Amount::from_str(&value).map_err(de::Error::custom)
    }
}
