use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid input for [{field}]: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str
    },
    #[error("Value for tag [{tag}] is {length} characters long, the two digit length prefix allows at most 99")]
    FieldTooLong {
        tag: String,
        length: usize
    },
    #[error("Malformed payload: {0}")]
    Malformed(String),
    #[error("Checksum mismatch: payload carries [{actual}] but content hashes to [{expected}]")]
    ChecksumMismatch {
        expected: String,
        actual: String
    }
}

impl EncodeError {
    pub fn empty(field: &'static str) -> Self {
        Self::InvalidInput { field, reason: "value is empty" }
    }

    pub fn not_digits(field: &'static str) -> Self {
        Self::InvalidInput { field, reason: "value must contain only digits 0-9" }
    }

    pub fn field_too_long(tag: &str, length: usize) -> Self {
        Self::FieldTooLong { tag: tag.to_string(), length }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
