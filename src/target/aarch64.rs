//! aarch64 NEON kernels.
use std::arch::aarch64::*;

use crate::utils::hex::{
    self, CASE_BIT, DELIMITER_MASK, DIGIT_OFFSETS, GATHER_DELIMITERS, SPREAD_DIGITS, ZERO_LANE,
};
use crate::{FormatConfig, ParseConfig, BLOCK_LEN, MAC_MASK, MAC_STR_LEN};

/// Delimiter removal across both 16-byte halves in one two-register lookup.
const COMPACT: [u8; 16] = {
    let mut table = [ZERO_LANE; 16];
    let mut i = 0;
    while i < DIGIT_OFFSETS.len() {
        table[i] = DIGIT_OFFSETS[i] as u8;
        i += 1;
    }
    table
};

/// Lanes past the twelve digits, forced valid before the horizontal check.
const PAST_DIGITS: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];

const DELIMITER_LANES: u64 = 0xFF_FFFF_FFFF;

/// # Safety
///
/// The CPU must support NEON.
#[target_feature(enable = "neon")]
pub(super) unsafe fn parse_neon(block: &[u8; BLOCK_LEN], config: &ParseConfig) -> Option<u64> {
    let halves = uint8x16x2_t(vld1q_u8(block.as_ptr()), vld1q_u8(block.as_ptr().add(16)));

    if config.validate_delimiters() {
        let gathered = vqtbl1q_u8(halves.0, vld1q_u8(GATHER_DELIMITERS.as_ptr()));
        let matches = vceqq_u8(gathered, vdupq_n_u8(config.delimiter()));
        if vgetq_lane_u64::<0>(vreinterpretq_u64_u8(matches)) & DELIMITER_LANES != DELIMITER_LANES {
            return None;
        }
    }

    let chars = vqtbl2q_u8(halves, vld1q_u8(COMPACT.as_ptr()));
    let folded = vbicq_u8(chars, vdupq_n_u8(CASE_BIT));
    let is_digit = vcleq_u8(vsubq_u8(chars, vdupq_n_u8(b'0')), vdupq_n_u8(9));

    if config.validate_hex() {
        let is_alpha = vcleq_u8(vsubq_u8(folded, vdupq_n_u8(b'A')), vdupq_n_u8(5));
        let valid = vorrq_u8(vorrq_u8(is_digit, is_alpha), vld1q_u8(PAST_DIGITS.as_ptr()));
        if vminvq_u8(valid) != 0xFF {
            return None;
        }
    }

    let nibbles = vbslq_u8(
        is_digit,
        vsubq_u8(chars, vdupq_n_u8(b'0')),
        vsubq_u8(folded, vdupq_n_u8(b'A' - 10)),
    );

    // each 16-bit lane holds (high digit, low digit) in memory order
    let pairs = vreinterpretq_u16_u8(nibbles);
    let high = vandq_u16(pairs, vdupq_n_u16(0x00FF));
    let low = vshrq_n_u16::<8>(pairs);
    let packed = vmovn_u16(vmlaq_n_u16(low, high, 16));
    let raw = vget_lane_u64::<0>(vreinterpret_u64_u8(packed));

    Some(raw.swap_bytes() >> 16)
}

/// # Safety
///
/// The CPU must support NEON.
#[target_feature(enable = "neon")]
pub(super) unsafe fn format_neon(value: u64, out: &mut [u8; MAC_STR_LEN], config: &FormatConfig) {
    let octets = ((value & MAC_MASK) << 16).swap_bytes();
    let bytes = vcombine_u8(vcreate_u8(octets), vdup_n_u8(0));

    let high_nibbles = vshrq_n_u8::<4>(bytes);
    let low_nibbles = vandq_u8(bytes, vdupq_n_u8(0x0F));

    let table = vld1q_u8(hex::digits(config.uppercase()).as_ptr());
    let digits = vzip1q_u8(vqtbl1q_u8(table, high_nibbles), vqtbl1q_u8(table, low_nibbles));

    let spread = vqtbl1q_u8(digits, vld1q_u8(SPREAD_DIGITS.as_ptr()));
    let text = vbslq_u8(
        vld1q_u8(DELIMITER_MASK.as_ptr()),
        vdupq_n_u8(config.delimiter()),
        spread,
    );

    vst1q_u8(out.as_mut_ptr(), text);
    out[MAC_STR_LEN - 1] = vgetq_lane_u8::<11>(digits);
}
