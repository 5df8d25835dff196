//! Builds VietQR bank-transfer payloads: the EMVCo tag-length-value string,
//! terminated by a CRC-16/CCITT-FALSE checksum, that any QR renderer can draw.
//!
//! ```no_run
//! use vietqr_encoder::encoder::encode;
//! use vietqr_encoder::models::TransferRequest;
//! use vietqr_encoder::types::Amount;
//!
//! let request = TransferRequest::new("970422", "0337541878")
//!     .with_amount(Amount::new(20_000))
//!     .with_message("Buy me a coffee");
//!
//! let payload = encode(&request)?;
//! println!("{payload}");
//! # Ok::<(), vietqr_encoder::encoder::EncodeError>(())
//! ```

pub mod encoder;
pub mod engine;
pub mod models;
pub mod types;
