use crate::encoder::crc::checksum;
use crate::encoder::errors::EncodeError;
use crate::encoder::tlv::{frame, parse_fields};
use crate::models::{PaymentFormat, TransferRequest};
use crate::types::Amount;

const PAYLOAD_FORMAT_INDICATOR: &str = "000201";
const INITIATION_STATIC: &str = "010211";
const INITIATION_DYNAMIC: &str = "010212";

const TAG_CONSUMER_ACCOUNT: &str = "38";
const TAG_BANK_INFO: &str = "01";
const TAG_BANK_BIN: &str = "00";
const TAG_ACCOUNT_NUMBER: &str = "01";
const NAPAS_GUID: &str = "0010A000000727";
const SERVICE_CODE_ACCOUNT_TRANSFER: &str = "0208QRIBFTTA";

const TRANSACTION_CURRENCY_VND: &str = "5303704";
const TAG_TRANSACTION_AMOUNT: &str = "54";
const COUNTRY_CODE_VN: &str = "5802VN";

const TAG_ADDITIONAL_DATA: &str = "62";
const TAG_PURPOSE_OF_TRANSACTION: &str = "08";

/// Tag and length of the trailing CRC field; the checksum covers this marker too.
pub const CRC_MARKER: &str = "6304";

/// Encodes a transfer request into a VietQR payload string.
///
/// The account holder is accepted for the caller's bookkeeping but is never
/// written into the payload.
pub fn encode(request: &TransferRequest) -> Result<String, EncodeError> {
    encode_fields(
        &request.bank,
        &request.account_number,
        request.amount,
        &request.message,
        request.format
    )
}

/// Field-level form of [`encode`], for callers that do not hold a [`TransferRequest`].
///
/// # Errors
/// Returns `EncodeError` if:
/// - `bank` or `account_number` is empty or contains anything but digits.
/// - A framed value (including the nested account group or the message) exceeds 99 characters.
pub fn encode_fields(
    bank: &str,
    account_number: &str,
    amount: Amount,
    message: &str,
    format: PaymentFormat
) -> Result<String, EncodeError> {
    require_digits("bank", bank)?;
    require_digits("account_number", account_number)?;

    let mut payload = String::with_capacity(128);
    payload.push_str(PAYLOAD_FORMAT_INDICATOR);
    payload.push_str(point_of_initiation(format));
    payload.push_str(&consumer_account_info(bank, account_number)?);
    payload.push_str(TRANSACTION_CURRENCY_VND);
    payload.push_str(&transaction_amount(amount)?);
    payload.push_str(COUNTRY_CODE_VN);
    payload.push_str(&additional_data(message)?);
    payload.push_str(CRC_MARKER);

    let crc = checksum(&payload);
    payload.push_str(&crc);

    Ok(payload)
}

/// Checks that a payload is well framed and that its trailing checksum matches.
pub fn verify(payload: &str) -> Result<(), EncodeError> {
    let split = payload.char_indices().rev().nth(3)
        .map(|(index, _)| index)
        .ok_or_else(|| EncodeError::malformed("payload is shorter than its checksum"))?;

    let (content, actual) = payload.split_at(split);

    if !content.ends_with(CRC_MARKER) {
        return Err(EncodeError::malformed(format!("expected [{CRC_MARKER}] before the checksum")));
    }

    parse_fields(payload)?;

    let expected = checksum(content);

    if !expected.eq_ignore_ascii_case(actual) {
        return Err(EncodeError::ChecksumMismatch { expected, actual: actual.to_string() });
    }

    Ok(())
}

fn require_digits(field: &'static str, value: &str) -> Result<(), EncodeError> {
    if value.is_empty() {
        return Err(EncodeError::empty(field));
    }

    if !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(EncodeError::not_digits(field));
    }

    Ok(())
}

fn point_of_initiation(format: PaymentFormat) -> &'static str {
    match format {
        PaymentFormat::Dynamic => INITIATION_DYNAMIC,
        PaymentFormat::Static => INITIATION_STATIC
    }
}

fn consumer_account_info(bank: &str, account_number: &str) -> Result<String, EncodeError> {
    let beneficiary = frame(TAG_BANK_BIN, bank)? + &frame(TAG_ACCOUNT_NUMBER, account_number)?;
    let bank_info = frame(TAG_BANK_INFO, &beneficiary)?;

    let group = format!("{NAPAS_GUID}{bank_info}{SERVICE_CODE_ACCOUNT_TRANSFER}");
    frame(TAG_CONSUMER_ACCOUNT, &group)
}

fn transaction_amount(amount: Amount) -> Result<String, EncodeError> {
    if amount.is_zero() {
        return Ok(String::new());
    }

    frame(TAG_TRANSACTION_AMOUNT, &amount.to_string())
}

fn additional_data(message: &str) -> Result<String, EncodeError> {
    if message.is_empty() {
        return Ok(String::new());
    }

    let purpose = frame(TAG_PURPOSE_OF_TRANSACTION, message)?;
    frame(TAG_ADDITIONAL_DATA, &purpose)
}
