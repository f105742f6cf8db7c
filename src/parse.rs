//! Text to 48-bit integer.
//!
//! All entry points return `None` on failure without saying why; use
//! [`try_parse`] or [`validate`] when the cause matters.
use crate::target::Backend;
use crate::{scalar, Error, Options, ParseConfig, Result, BLOCK_LEN, MAC_STR_LEN};

/// Parses the first 17 bytes of a 32-byte block. The array type guarantees
/// the wide load stays in bounds; bytes past the 17th are ignored.
///
/// ```
/// let mut block = [0u8; macad::BLOCK_LEN];
/// block[..17].copy_from_slice(b"aa:bb:cc:dd:ee:ff");
///
/// assert_eq!(macad::parse_block(&block, &Default::default()), Some(0xAABBCCDDEEFF));
/// ```
#[inline]
pub fn parse_block(block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
    Backend::active().parse_supported(block, config)
}

/// Parses the 17 bytes at `input` straight from the caller's memory.
///
/// Returns `None` when `len` is below 17.
///
/// # Safety
///
/// `input` must be valid for reads of 32 bytes, whatever `len` says. Only
/// the first 17 bytes affect the result.
#[inline]
pub unsafe fn parse_unchecked(input: *const u8, len: usize, config: &ParseConfig) -> Option<u64> {
    if len < MAC_STR_LEN {
        return None;
    }

    let block = input.cast::<[u8; BLOCK_LEN]>().read_unaligned();
    parse_block(&block, config)
}

/// Parses the first 17 bytes of `input`.
///
/// Inputs shorter than a block are copied into a zero-filled stack buffer
/// first, so any length is safe.
///
/// ```
/// use macad::ParseConfig;
///
/// assert_eq!(macad::parse("01:23:45:67:89:AB", &ParseConfig::STRICT), Some(0x0123456789AB));
/// assert_eq!(macad::parse("01-23-45-67-89-AB", &ParseConfig::STRICT), None);
/// assert_eq!(macad::parse("01:23:45", &ParseConfig::DEFAULT), None);
/// ```
pub fn parse(input: impl AsRef<[u8]>, config: &ParseConfig) -> Option<u64> {
    let input = input.as_ref();
    if input.len() < MAC_STR_LEN {
        return None;
    }

    match input.first_chunk::<BLOCK_LEN>() {
        Some(block) => parse_block(block, config),
        None => {
            let mut block = [0; BLOCK_LEN];
            block[..input.len()].copy_from_slice(input);
            parse_block(&block, config)
        }
    }
}

/// [`parse`] with the configuration fixed by `O` at compile time.
#[inline]
pub fn parse_as<O: Options + ?Sized>(input: impl AsRef<[u8]>) -> Option<u64> {
    parse(input, &const { ParseConfig::of::<O>() })
}

/// [`parse`], naming the cause on failure.
pub fn try_parse(input: impl AsRef<[u8]>, config: &ParseConfig) -> Result<u64> {
    let input = input.as_ref();

    parse(input, config).ok_or_else(|| match scalar::check(input, config) {
        Err(error) => error,
        // `check` rejects exactly what the kernels reject
        Ok(()) => Error::TooShort(input.len()),
    })
}

/// Reports why [`parse`] would reject `input`: length first, then the
/// lowest mismatching delimiter, then the lowest non-hex digit.
///
/// ```
/// use macad::{Error, ParseConfig};
///
/// assert_eq!(
///     macad::validate("01:23:45:67:89:AG", &ParseConfig::STRICT),
///     Err(Error::InvalidHexDigit { offset: 16, found: b'G' })
/// );
/// ```
pub fn validate(input: impl AsRef<[u8]>, config: &ParseConfig) -> Result<()> {
    scalar::check(input.as_ref(), config)
}
