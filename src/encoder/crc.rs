const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// CRC-16/CCITT-FALSE: polynomial 0x1021, initial value 0xFFFF, MSB first,
/// no reflection and no final xor.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    data.iter().fold(INITIAL, |crc, byte| update(crc, *byte))
}

/// Checksum of a payload, rendered as the four upper-case hex digits that
/// terminate it.
///
/// The payload is walked as UTF-16 code units and only the low byte of each
/// unit enters the register, which is what deployed VietQR generators do. For
/// ASCII text this is identical to [`crc16_ccitt`] over the bytes.
pub fn checksum(data: &str) -> String {
    let crc = data.encode_utf16()
        .fold(INITIAL, |crc, unit| update(crc, (unit & 0xFF) as u8));

    format!("{crc:04X}")
}

fn update(mut crc: u16, byte: u8) -> u16 {
    crc ^= u16::from(byte) << 8;

    for _ in 0..8 {
        crc = if crc & 0x8000 != 0 {
            (crc << 1) ^ POLYNOMIAL
        } else {
            crc << 1
        };
    }

    crc
}
