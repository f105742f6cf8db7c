//! x86_64 kernels.
//!
//! Parsing has an AVX2 variant that loads the whole 32-byte block into one
//! register and an SSSE3 variant that works on the two 16-byte halves.
//! Formatting only needs one 128-bit register, so AVX2 reuses the SSSE3
//! formatter.
use std::arch::x86_64::*;

use crate::utils::hex::{
    self, CASE_BIT, DELIMITER_MASK, GATHER_DELIMITERS, SPREAD_DIGITS, ZERO_LANE,
};
use crate::{FormatConfig, ParseConfig, BLOCK_LEN, MAC_MASK, MAC_STR_LEN};

/// Digits 0..11 taken from input bytes 0..16.
const COMPACT_LOW: [u8; 16] = [
    0, 1, 3, 4, 6, 7, 9, 10, 12, 13, 15, ZERO_LANE, ZERO_LANE, ZERO_LANE, ZERO_LANE, ZERO_LANE,
];

/// Input byte 16, lane 0 of the upper half, becomes digit 11.
const COMPACT_HIGH: [u8; 16] = {
    let mut table = [ZERO_LANE; 16];
    table[11] = 0;
    table
};

/// Low byte of each of the first six 16-bit lanes.
const PACK_PAIRS: [u8; 16] = {
    let mut table = [ZERO_LANE; 16];
    let mut i = 0;
    while i < 6 {
        table[i] = (i * 2) as u8;
        i += 1;
    }
    table
};

/// One 16-bit lane per digit pair: the first (high) digit times 16 plus the
/// second (low) digit.
const PAIR_WEIGHTS: i16 = 0x0110;

const DELIMITER_LANES: i32 = 0x1F;
const DIGIT_LANES: i32 = 0x0FFF;

#[inline(always)]
unsafe fn load(table: &[u8; 16]) -> __m128i {
    _mm_loadu_si128(table.as_ptr().cast())
}

#[inline(always)]
unsafe fn splat(byte: u8) -> __m128i {
    _mm_set1_epi8(byte as i8)
}

/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub(super) unsafe fn parse_avx2(block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
    let chunk = _mm256_loadu_si256(block.as_ptr().cast());

    if config.validate_delimiters() {
        // every delimiter sits in the low 128-bit lane
        let gathered = _mm256_shuffle_epi8(chunk, _mm256_broadcastsi128_si256(load(&GATHER_DELIMITERS)));
        let matches = _mm256_cmpeq_epi8(gathered, _mm256_set1_epi8(config.delimiter() as i8));
        if _mm256_movemask_epi8(matches) & DELIMITER_LANES != DELIMITER_LANES {
            return None;
        }
    }

    // byte shuffles stay inside 128-bit lanes, so byte 16 is fetched from a
    // copy of the upper lane and merged in
    let low = _mm256_shuffle_epi8(chunk, _mm256_broadcastsi128_si256(load(&COMPACT_LOW)));
    let upper = _mm256_permute2x128_si256::<0x11>(chunk, chunk);
    let high = _mm256_shuffle_epi8(upper, _mm256_broadcastsi128_si256(load(&COMPACT_HIGH)));
    let chars = _mm256_or_si256(low, high);

    let folded = _mm256_andnot_si256(_mm256_set1_epi8(CASE_BIT as i8), chars);
    let is_digit = _mm256_and_si256(
        _mm256_cmpgt_epi8(chars, _mm256_set1_epi8((b'0' - 1) as i8)),
        _mm256_cmpgt_epi8(_mm256_set1_epi8((b'9' + 1) as i8), chars),
    );

    if config.validate_hex() {
        let is_alpha = _mm256_and_si256(
            _mm256_cmpgt_epi8(folded, _mm256_set1_epi8((b'A' - 1) as i8)),
            _mm256_cmpgt_epi8(_mm256_set1_epi8((b'F' + 1) as i8), folded),
        );
        let valid = _mm256_or_si256(is_digit, is_alpha);
        if _mm256_movemask_epi8(valid) & DIGIT_LANES != DIGIT_LANES {
            return None;
        }
    }

    let digit_values = _mm256_sub_epi8(chars, _mm256_set1_epi8(b'0' as i8));
    let alpha_values = _mm256_sub_epi8(folded, _mm256_set1_epi8((b'A' - 10) as i8));
    let nibbles = _mm256_blendv_epi8(alpha_values, digit_values, is_digit);

    let pairs = _mm256_maddubs_epi16(nibbles, _mm256_set1_epi16(PAIR_WEIGHTS));
    let packed = _mm256_shuffle_epi8(pairs, _mm256_broadcastsi128_si256(load(&PACK_PAIRS)));
    let raw = _mm_cvtsi128_si64(_mm256_castsi256_si128(packed)) as u64;

    Some(raw.swap_bytes() >> 16)
}

/// # Safety
///
/// The CPU must support SSSE3.
#[target_feature(enable = "ssse3")]
pub(super) unsafe fn parse_ssse3(block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
    let low_half = _mm_loadu_si128(block.as_ptr().cast());
    let high_half = _mm_loadu_si128(block.as_ptr().add(16).cast());

    if config.validate_delimiters() {
        let gathered = _mm_shuffle_epi8(low_half, load(&GATHER_DELIMITERS));
        let matches = _mm_cmpeq_epi8(gathered, splat(config.delimiter()));
        if _mm_movemask_epi8(matches) & DELIMITER_LANES != DELIMITER_LANES {
            return None;
        }
    }

    let chars = _mm_or_si128(
        _mm_shuffle_epi8(low_half, load(&COMPACT_LOW)),
        _mm_shuffle_epi8(high_half, load(&COMPACT_HIGH)),
    );

    let folded = _mm_andnot_si128(splat(CASE_BIT), chars);
    let is_digit = _mm_and_si128(
        _mm_cmpgt_epi8(chars, splat(b'0' - 1)),
        _mm_cmplt_epi8(chars, splat(b'9' + 1)),
    );

    if config.validate_hex() {
        let is_alpha = _mm_and_si128(
            _mm_cmpgt_epi8(folded, splat(b'A' - 1)),
            _mm_cmplt_epi8(folded, splat(b'F' + 1)),
        );
        let valid = _mm_or_si128(is_digit, is_alpha);
        if _mm_movemask_epi8(valid) & DIGIT_LANES != DIGIT_LANES {
            return None;
        }
    }

    // no blendv before SSE4.1
    let digit_values = _mm_and_si128(is_digit, _mm_sub_epi8(chars, splat(b'0')));
    let alpha_values = _mm_andnot_si128(is_digit, _mm_sub_epi8(folded, splat(b'A' - 10)));
    let nibbles = _mm_or_si128(digit_values, alpha_values);

    let pairs = _mm_maddubs_epi16(nibbles, _mm_set1_epi16(PAIR_WEIGHTS));
    let packed = _mm_shuffle_epi8(pairs, load(&PACK_PAIRS));
    let raw = _mm_cvtsi128_si64(packed) as u64;

    Some(raw.swap_bytes() >> 16)
}

/// # Safety
///
/// The CPU must support SSSE3.
#[target_feature(enable = "ssse3")]
pub(super) unsafe fn format_ssse3(value: u64, out: &mut [u8; MAC_STR_LEN], config: &FormatConfig) {
    // six octets in transmission order followed by two zero bytes
    let octets = ((value & MAC_MASK) << 16).swap_bytes();
    let bytes = _mm_cvtsi64_si128(octets as i64);

    let nibble_mask = splat(0x0F);
    let high_nibbles = _mm_and_si128(_mm_srli_epi16::<4>(bytes), nibble_mask);
    let low_nibbles = _mm_and_si128(bytes, nibble_mask);

    let table = load(hex::digits(config.uppercase()));
    let digits = _mm_unpacklo_epi8(
        _mm_shuffle_epi8(table, high_nibbles),
        _mm_shuffle_epi8(table, low_nibbles),
    );

    let spread = _mm_shuffle_epi8(digits, load(&SPREAD_DIGITS));
    let mask = load(&DELIMITER_MASK);
    let text = _mm_or_si128(
        _mm_andnot_si128(mask, spread),
        _mm_and_si128(mask, splat(config.delimiter())),
    );

    _mm_storeu_si128(out.as_mut_ptr().cast(), text);
    // digit 11 is the high byte of 16-bit lane 5
    out[MAC_STR_LEN - 1] = (_mm_extract_epi16::<5>(digits) >> 8) as u8;
}
