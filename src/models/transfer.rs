use csv::StringRecord;
use serde::Deserialize;

use crate::models::PaymentFormat;
use crate::types::Amount;

/// Details of a single bank transfer to be turned into a QR payload.
///
/// Deserializes from a CSV row with the headers
/// `bank,account,holder,amount,content,format`; every column after `account`
/// may be empty or missing.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
pub struct TransferRequest {
    /// Acquirer BIN of the beneficiary bank (e.g. `970422`). Rows read from a
    /// file may carry a short name instead, resolved through a `BankDirectory`.
    pub bank: String,
    /// Beneficiary account number.
    #[serde(rename = "account")]
    pub account_number: String,
    /// Beneficiary name. Shown to the payer by the caller, never encoded.
    #[serde(rename = "holder", default)]
    pub account_holder: Option<String>,
    /// Fixed amount in VND; zero leaves the amount to the payer.
    #[serde(default)]
    pub amount: Amount,
    /// Transfer description shown in the payer's banking app.
    #[serde(rename = "content", default)]
    pub message: String,
    #[serde(default)]
    pub format: PaymentFormat
}

impl TransferRequest {
    /// Deserializes one CSV record against the file's headers.
    ///
    /// Records shorter than the header row are padded with empty cells first, so
    /// trailing columns can be left off entirely rather than written as `,,,`.
    pub fn from_record(record: &StringRecord, headers: &StringRecord) -> Result<Self, csv::Error> {
        if record.len() >= headers.len() {
            return record.deserialize(Some(headers));
        }

        let mut padded = record.clone();

        while padded.len() < headers.len() {
            padded.push_field("");
        }

        padded.deserialize(Some(headers))
    }

    pub fn new(bank: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            bank: bank.into(),
            account_number: account_number.into(),
            ..Self::default()
        }
    }

    pub fn with_holder(mut self, account_holder: impl Into<String>) -> Self {
        self.account_holder = Some(account_holder.into());
        self
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_format(mut self, format: PaymentFormat) -> Self {
        self.format = format;
        self
    }
}
