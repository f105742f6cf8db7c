//! Scalar reference kernels.
//!
//! These process one byte at a time and define what every vector backend
//! must produce, bit for bit, including for input that is not a valid
//! address.
use crate::utils::hex::{self, DELIMITER_OFFSETS, DIGIT_OFFSETS};
use crate::{Error, FormatConfig, ParseConfig, Result, BLOCK_LEN, MAC_MASK, MAC_STR_LEN};

/// Parses the first 17 bytes of `block`.
pub fn parse_block(block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
    check(&block[..MAC_STR_LEN], config).ok()?;

    let value = DIGIT_OFFSETS
        .chunks_exact(2)
        .map(|pair| hex::pack(hex::nibble(block[pair[0]]), hex::nibble(block[pair[1]])))
        .fold(0u64, |value, octet| (value << 8) | u64::from(octet));

    Some(value)
}

/// Formats the low 48 bits of `value` into `out`.
pub fn format_into(value: u64, out: &mut [u8; MAC_STR_LEN], config: &FormatConfig) {
    let digits = hex::digits(config.uppercase());
    let octets = (value & MAC_MASK).to_be_bytes();

    for (index, octet) in octets[2..].iter().enumerate() {
        out[index * 3] = digits[usize::from(octet >> 4)];
        out[index * 3 + 1] = digits[usize::from(octet & 0x0F)];
    }
    for offset in DELIMITER_OFFSETS {
        out[offset] = config.delimiter();
    }
}

pub fn encode(value: u64, config: &FormatConfig) -> [u8; MAC_STR_LEN] {
    let mut out = [0; MAC_STR_LEN];
    format_into(value, &mut out, config);
    out
}

/// Reports the first reason `input` would be rejected under `config`:
/// length, then delimiters, then digits, each in offset order.
pub(crate) fn check(input: &[u8], config: &ParseConfig) -> Result<()> {
    if input.len() < MAC_STR_LEN {
        return Err(Error::TooShort(input.len()));
    }

    if config.validate_delimiters() {
        let expected = config.delimiter();
        if let Some(&offset) = DELIMITER_OFFSETS.iter().find(|&&i| input[i] != expected) {
            return Err(Error::DelimiterMismatch {
                offset,
                expected,
                found: input[offset],
            });
        }
    }

    if config.validate_hex() {
        if let Some(&offset) = DIGIT_OFFSETS.iter().find(|&&i| !hex::is_hex(input[i])) {
            return Err(Error::InvalidHexDigit {
                offset,
                found: input[offset],
            });
        }
    }

    Ok(())
}
