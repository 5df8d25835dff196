//! VietQR (NAPAS 247 / EMVCo merchant-presented) payload encoding.

mod crc;
mod errors;
mod tlv;
mod vietqr;

pub use crc::{checksum, crc16_ccitt};
pub use errors::EncodeError;
pub use tlv::{frame, parse_fields, TlvField, MAX_VALUE_LENGTH};
pub use vietqr::{encode, encode_fields, verify, CRC_MARKER};
