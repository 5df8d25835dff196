use crate::encoder::errors::EncodeError;

/// Largest value a two digit length prefix can describe.
pub const MAX_VALUE_LENGTH: usize = 99;

/// A single tag-length-value unit, as found in a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    pub tag: String,
    pub value: String
}

impl TlvField {
    /// Length of the value as the prefix counts it, in UTF-16 code units.
    pub fn length(&self) -> usize {
        utf16_length(&self.value)
    }

    /// Parses this field's value as a nested TLV sequence (e.g. tag `38` or `62`).
    pub fn nested(&self) -> Result<Vec<TlvField>, EncodeError> {
        parse_fields(&self.value)
    }
}

/// Character count used by every length prefix. Wallets count UTF-16 code
/// units, so a character outside the BMP (an emoji) counts as two.
fn utf16_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Frames `value` under `tag`: two digit tag, two digit zero padded length, value.
///
/// Every field in the payload goes through here, including nested ones, so the
/// length rule lives in exactly one place.
pub fn frame(tag: &str, value: &str) -> Result<String, EncodeError> {
    let length = utf16_length(value);

    if length > MAX_VALUE_LENGTH {
        return Err(EncodeError::field_too_long(tag, length));
    }

    Ok(format!("{tag}{length:02}{value}"))
}

/// Splits a flat TLV string into its fields without interpreting them.
pub fn parse_fields(data: &str) -> Result<Vec<TlvField>, EncodeError> {
    let mut fields = Vec::new();
    let mut chars = data.chars();

    loop {
        let tag: String = chars.by_ref().take(2).collect();

        if tag.is_empty() {
            break;
        }

        if tag.len() != 2 || !tag.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(EncodeError::malformed(format!("invalid tag [{tag}]")));
        }

        let prefix: String = chars.by_ref().take(2).collect();

        if prefix.len() != 2 || !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(EncodeError::malformed(format!("invalid length [{prefix}] for tag [{tag}]")));
        }

        let length: usize = prefix.parse()
            .map_err(|_| EncodeError::malformed(format!("invalid length [{prefix}] for tag [{tag}]")))?;

        let mut value = String::new();
        let mut units = 0;

        while units < length {
            let Some(next) = chars.next() else {
                break;
            };

            units += next.len_utf16();
            value.push(next);
        }

        if units != length {
            return Err(EncodeError::malformed(format!("tag [{tag}] declares {length} characters but the value holds {units}")));
        }

        fields.push(TlvField { tag, value });
    }

    Ok(fields)
}
