//! 48-bit integer to text.
//!
//! Formatting is total: bits above the 48th are dropped and every call
//! writes exactly 17 bytes.
use crate::target::Backend;
use crate::{Error, FormatConfig, Options, Result, MAC_STR_LEN};

/// Writes the canonical form of `value` into `out` and returns the number
/// of bytes written, always 17.
#[inline]
pub fn format_into(value: u64, out: &mut [u8; MAC_STR_LEN], config: &FormatConfig) -> usize {
    Backend::active().format_supported(value, out, config);
    MAC_STR_LEN
}

/// [`format_into`] for a buffer whose capacity is only known at run time.
/// Bytes past the 17th are left untouched.
pub fn format_to_slice(value: u64, out: &mut [u8], config: &FormatConfig) -> Result<usize> {
    let capacity = out.len();
    let out = out
        .first_chunk_mut::<MAC_STR_LEN>()
        .ok_or(Error::BufferTooSmall(capacity))?;

    Ok(format_into(value, out, config))
}

/// The canonical form of `value` as a stack array.
#[inline]
pub fn encode(value: u64, config: &FormatConfig) -> [u8; MAC_STR_LEN] {
    let mut out = [0; MAC_STR_LEN];
    format_into(value, &mut out, config);
    out
}

/// The canonical form of `value` as a `String` of exactly 17 bytes.
///
/// ```
/// use macad::FormatConfig;
///
/// let config = FormatConfig::DEFAULT.with_delimiter(b'-').with_uppercase(false);
///
/// assert_eq!(macad::format(0xFFFF_AABB_CCDD_EEFF, &FormatConfig::DEFAULT), "AA:BB:CC:DD:EE:FF");
/// assert_eq!(macad::format(0x0123456789AB, &config), "01-23-45-67-89-ab");
/// ```
pub fn format(value: u64, config: &FormatConfig) -> String {
    let mut text = String::with_capacity(MAC_STR_LEN);
    text.push_str(as_str(&encode(value, config)));
    text
}

/// [`format`] with the configuration fixed by `O` at compile time.
#[inline]
pub fn format_as<O: Options + ?Sized>(value: u64) -> String {
    format(value, &const { FormatConfig::of::<O>() })
}

/// Borrows formatted output as text.
pub(crate) fn as_str(text: &[u8; MAC_STR_LEN]) -> &str {
    debug_assert!(text.is_ascii());
    // SAFETY: hex digits plus a delimiter `FormatConfig` keeps ASCII
    unsafe { std::str::from_utf8_unchecked(text) }
}
