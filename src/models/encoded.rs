use serde::Serialize;

use crate::types::RowNumber;

/// One line of batch output: the request it came from and its payload.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct EncodedRow {
    pub row: RowNumber,
    pub bank: String,
    pub account_number: String,
    pub payload: String
}
