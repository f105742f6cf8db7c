//! Lookup tables shared by the scalar and vector kernels.
#![cfg_attr(
    not(any(target_arch = "x86_64", target_arch = "aarch64")),
    allow(dead_code)
)]

/// Nibble to ASCII digit, uppercase letters.
pub(crate) const UPPER_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Nibble to ASCII digit, lowercase letters.
pub(crate) const LOWER_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Byte offsets of the five delimiters in the canonical form.
pub(crate) const DELIMITER_OFFSETS: [usize; 5] = [2, 5, 8, 11, 14];

/// Byte offsets of the twelve hex digits in the canonical form, in order.
pub(crate) const DIGIT_OFFSETS: [usize; 12] = [0, 1, 3, 4, 6, 7, 9, 10, 12, 13, 15, 16];

/// Clearing this bit folds ASCII letters to uppercase. Digits are classified
/// before folding.
pub(crate) const CASE_BIT: u8 = 0x20;

/// Lane index that makes a byte shuffle write zero.
pub(crate) const ZERO_LANE: u8 = 0x80;

/// Gathers the delimiter bytes into lanes 0..5.
pub(crate) const GATHER_DELIMITERS: [u8; 16] = {
    let mut table = [ZERO_LANE; 16];
    let mut i = 0;
    while i < DELIMITER_OFFSETS.len() {
        table[i] = DELIMITER_OFFSETS[i] as u8;
        i += 1;
    }
    table
};

/// Spreads 12 ordered digits over the first 16 output bytes, leaving the
/// delimiter positions zeroed. Digit 11 lands at offset 16, outside the
/// register, and is written separately.
pub(crate) const SPREAD_DIGITS: [u8; 16] = {
    let mut table = [ZERO_LANE; 16];
    let mut i = 0;
    while i < 11 {
        table[DIGIT_OFFSETS[i]] = i as u8;
        i += 1;
    }
    table
};

/// `0xFF` at every delimiter position of the first 16 output bytes.
pub(crate) const DELIMITER_MASK: [u8; 16] = {
    let mut table = [0; 16];
    let mut i = 0;
    while i < DELIMITER_OFFSETS.len() {
        table[DELIMITER_OFFSETS[i]] = 0xFF;
        i += 1;
    }
    table
};

/// Digit table for the requested letter case.
#[inline(always)]
pub(crate) const fn digits(uppercase: bool) -> &'static [u8; 16] {
    if uppercase {
        &UPPER_DIGITS
    } else {
        &LOWER_DIGITS
    }
}

/// Nibble value of one digit byte, computed exactly as the vector kernels
/// compute it. Non-hex bytes yield an arbitrary but deterministic value.
#[inline(always)]
pub(crate) const fn nibble(byte: u8) -> u8 {
    if is_digit(byte) {
        byte.wrapping_sub(b'0')
    } else {
        fold_case(byte).wrapping_sub(b'A' - 10)
    }
}

#[inline(always)]
pub(crate) const fn fold_case(byte: u8) -> u8 {
    byte & !CASE_BIT
}

#[inline(always)]
pub(crate) const fn is_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9')
}

/// `true` for `0-9`, `A-F` and `a-f`.
#[inline(always)]
pub(crate) const fn is_hex(byte: u8) -> bool {
    is_digit(byte) || matches!(fold_case(byte), b'A'..=b'F')
}

/// Packs a (high, low) nibble pair the way a 16-bit multiply-add does,
/// keeping only the low byte of `high * 16 + low`.
#[inline(always)]
pub(crate) const fn pack(high: u8, low: u8) -> u8 {
    (high << 4).wrapping_add(low)
}
