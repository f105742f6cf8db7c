//! Conversion between the textual form of a MAC address
//! (`AA:BB:CC:DD:EE:FF`) and its 48-bit integer value, using SIMD byte-lane
//! operations with a fixed instruction count per call.
//!
//! ```
//! use macad::{FormatConfig, ParseConfig};
//!
//! let value = macad::parse("aa:bb:cc:dd:ee:ff", &ParseConfig::STRICT);
//! assert_eq!(value, Some(0xAABBCCDDEEFF));
//!
//! let text = macad::format(0xAABBCCDDEEFF, &FormatConfig::DEFAULT.with_uppercase(false));
//! assert_eq!(text, "aa:bb:cc:dd:ee:ff");
//! ```
//!
//! [`FormatConfig::with_delimiter`] panics on a non-ASCII byte and suits
//! constants. For a delimiter chosen at runtime use
//! [`FormatConfig::try_with_delimiter`]:
//!
//! ```
//! use macad::{Error, FormatConfig};
//!
//! let user_choice = 0xB7;
//! let config = FormatConfig::DEFAULT.try_with_delimiter(user_choice);
//! assert_eq!(config, Err(Error::NonAsciiDelimiter(0xB7)));
//! ```
//!
//! The kernel for the running CPU (AVX2, SSSE3, NEON or the scalar
//! reference) is picked once per process; see [`Backend`].
mod error;
mod format;
mod mac;
mod options;
mod parse;
pub mod scalar;
mod target;

mod utils;

pub use error::*;
pub use format::{encode, format, format_as, format_into, format_to_slice};
pub use mac::*;
pub use options::*;
pub use parse::*;
pub use target::Backend;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Length of the canonical textual form.
pub const MAC_STR_LEN: usize = 17;

/// Width of one wide load. Parsing reads this many bytes to use 17.
pub const BLOCK_LEN: usize = 32;

/// The 48 significant bits of a MAC address value.
pub const MAC_MASK: u64 = 0xFFFF_FFFF_FFFF;
