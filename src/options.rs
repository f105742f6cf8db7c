//! Parse and format configuration.
//!
//! Configuration comes in two shapes. [`ParseConfig`] and [`FormatConfig`]
//! are plain runtime values. The [`Options`] trait fixes a configuration at
//! compile time: every associated constant has a default, so an
//! implementation only overrides what it cares about.
//!
//! ```
//! use macad::{format_as, parse_as, Options};
//!
//! struct Dashes;
//!
//! impl Options for Dashes {
//!     const DELIMITER: u8 = b'-';
//! }
//!
//! assert_eq!(format_as::<Dashes>(0x0123456789AB), "01-23-45-67-89-AB");
//! assert_eq!(parse_as::<Dashes>("01-23-45-67-89-AB"), Some(0x0123456789AB));
//! ```
use crate::{Error, Result};

/// Compile-time configuration shared by parsing and formatting.
pub trait Options {
    /// Reject input whose delimiter positions don't hold [`Self::DELIMITER`].
    const VALIDATE_DELIMITERS: bool = false;
    /// Reject input whose digit positions hold a non-hex byte.
    const VALIDATE_HEX: bool = false;
    /// Separator used for validation and formatting.
    const DELIMITER: u8 = b':';
    /// Letter case used for formatting. Parsing is always case-insensitive.
    const UPPERCASE: bool = true;
}

/// Every option at its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultOptions;

impl Options for DefaultOptions {}

/// Validates both delimiters and hex digits.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictOptions;

impl Options for StrictOptions {
    const VALIDATE_DELIMITERS: bool = true;
    const VALIDATE_HEX: bool = true;
}

/// Runtime parse configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    validate_delimiters: bool,
    validate_hex: bool,
    delimiter: u8,
}

impl ParseConfig {
    /// No validation, `:` as delimiter.
    pub const DEFAULT: ParseConfig = ParseConfig::of::<DefaultOptions>();

    /// Both validations enabled, `:` as delimiter.
    pub const STRICT: ParseConfig = ParseConfig::of::<StrictOptions>();

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Lifts the constants of `O` into a value.
    pub const fn of<O: Options + ?Sized>() -> Self {
        Self {
            validate_delimiters: O::VALIDATE_DELIMITERS,
            validate_hex: O::VALIDATE_HEX,
            delimiter: O::DELIMITER,
        }
    }

    pub const fn with_delimiter_validation(mut self, enabled: bool) -> Self {
        self.validate_delimiters = enabled;
        self
    }

    pub const fn with_hex_validation(mut self, enabled: bool) -> Self {
        self.validate_hex = enabled;
        self
    }

    /// Any byte is accepted; it is only compared against input.
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[inline(always)]
    pub const fn validate_delimiters(&self) -> bool {
        self.validate_delimiters
    }

    #[inline(always)]
    pub const fn validate_hex(&self) -> bool {
        self.validate_hex
    }

    #[inline(always)]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Runtime format configuration.
///
/// The delimiter is always a single ASCII byte, so formatted output is
/// always valid UTF-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFormatConfig"))]
pub struct FormatConfig {
    delimiter: u8,
    uppercase: bool,
}

impl FormatConfig {
    /// Uppercase digits, `:` as delimiter.
    pub const DEFAULT: FormatConfig = FormatConfig::of::<DefaultOptions>();

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Lifts the constants of `O` into a value.
    ///
    /// # Panics
    ///
    /// If `O::DELIMITER` is not ASCII. In a `const` context this is a
    /// compile error.
    pub const fn of<O: Options + ?Sized>() -> Self {
        Self::new_unchecked(O::DELIMITER, O::UPPERCASE)
    }

    /// # Panics
    ///
    /// If `delimiter` is not ASCII. See [`FormatConfig::try_with_delimiter`].
    pub const fn with_delimiter(self, delimiter: u8) -> Self {
        Self::new_unchecked(delimiter, self.uppercase)
    }

    pub const fn try_with_delimiter(mut self, delimiter: u8) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(Error::NonAsciiDelimiter(delimiter));
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    pub const fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    #[inline(always)]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    #[inline(always)]
    pub const fn uppercase(&self) -> bool {
        self.uppercase
    }

    const fn new_unchecked(delimiter: u8, uppercase: bool) -> Self {
        assert!(delimiter.is_ascii(), "format delimiter must be ASCII");
        Self {
            delimiter,
            uppercase,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, rename = "FormatConfig")]
struct RawFormatConfig {
    delimiter: u8,
    uppercase: bool,
}

#[cfg(feature = "serde")]
impl Default for RawFormatConfig {
    fn default() -> Self {
        Self {
            delimiter: FormatConfig::DEFAULT.delimiter,
            uppercase: FormatConfig::DEFAULT.uppercase,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawFormatConfig> for FormatConfig {
    type Error = Error;

    fn try_from(raw: RawFormatConfig) -> Result<Self> {
        FormatConfig::DEFAULT
            .with_uppercase(raw.uppercase)
            .try_with_delimiter(raw.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyDelimiter;

    impl Options for OnlyDelimiter {
        const DELIMITER: u8 = b'-';
    }

    struct OnlyLowercase;

    impl Options for OnlyLowercase {
        const UPPERCASE: bool = false;
    }

    struct OnlyHexValidation;

    impl Options for OnlyHexValidation {
        const VALIDATE_HEX: bool = true;
    }

    #[test]
    fn defaults() {
        let parse = ParseConfig::default();
        let format = FormatConfig::default();

        assert!(!parse.validate_delimiters());
        assert!(!parse.validate_hex());
        assert_eq!(parse.delimiter(), b':');
        assert_eq!(format.delimiter(), b':');
        assert!(format.uppercase());
    }

    #[test]
    fn partial_options_keep_other_defaults() {
        let parse = ParseConfig::of::<OnlyDelimiter>();
        assert_eq!(parse, ParseConfig::DEFAULT.with_delimiter(b'-'));
        assert_eq!(
            FormatConfig::of::<OnlyLowercase>(),
            FormatConfig::DEFAULT.with_uppercase(false)
        );
        assert_eq!(
            ParseConfig::of::<OnlyHexValidation>(),
            ParseConfig::DEFAULT.with_hex_validation(true)
        );
        assert_eq!(FormatConfig::of::<OnlyHexValidation>(), FormatConfig::DEFAULT);
    }

    #[test]
    fn strict_enables_both_validations() {
        assert!(ParseConfig::STRICT.validate_delimiters());
        assert!(ParseConfig::STRICT.validate_hex());
        assert_eq!(ParseConfig::STRICT.delimiter(), b':');
    }

    #[test]
    fn rejects_non_ascii_format_delimiter() {
        assert_eq!(
            FormatConfig::DEFAULT.try_with_delimiter(0xB7),
            Err(Error::NonAsciiDelimiter(0xB7))
        );
        assert!(FormatConfig::DEFAULT.try_with_delimiter(b' ').is_ok());
    }

    #[test]
    #[should_panic(expected = "format delimiter must be ASCII")]
    fn with_delimiter_panics_on_non_ascii() {
        let _ = FormatConfig::DEFAULT.with_delimiter(0xFF);
    }
}
