use std::fmt::{self, Display, LowerHex, UpperHex};
use std::str::FromStr;

use crate::format::as_str;
use crate::{encode, try_parse, Error, FormatConfig, ParseConfig, Result, MAC_MASK, MAC_STR_LEN};

/// A 48-bit hardware address.
///
/// `Display` and `{:X}` print `AA:BB:CC:DD:EE:FF`, `{:x}` prints
/// `aa:bb:cc:dd:ee:ff`. `FromStr` accepts exactly the 17-byte canonical form
/// with `:` delimiters, in either case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress(u64);

impl MacAddress {
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        MacAddress(u64::from_be_bytes([0, 0, a, b, c, d, e, f]))
    }

    /// Bits above the 48th are dropped.
    pub const fn from_u64(value: u64) -> Self {
        MacAddress(value & MAC_MASK)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Octets in transmission order.
    pub const fn octets(&self) -> [u8; 6] {
        let [_, _, a, b, c, d, e, f] = self.0.to_be_bytes();
        [a, b, c, d, e, f]
    }

    /// Parses with an explicit configuration, accepting trailing bytes like
    /// [`crate::parse`] does.
    pub fn parse_str(input: impl AsRef<[u8]>, config: &ParseConfig) -> Option<Self> {
        crate::parse(input, config).map(MacAddress)
    }

    pub fn to_string_with(&self, config: &FormatConfig) -> String {
        crate::format(self.0, config)
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, uppercase: bool) -> fmt::Result {
        let text = encode(self.0, &FormatConfig::DEFAULT.with_uppercase(uppercase));
        f.pad(as_str(&text))
    }
}

impl Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, true)
    }
}

impl UpperHex for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, true)
    }
}

impl LowerHex for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAC_STR_LEN {
            return Err(Error::TrailingBytes(s.len()));
        }

        try_parse(s, &ParseConfig::STRICT).map(MacAddress)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from([a, b, c, d, e, f]: [u8; 6]) -> Self {
        MacAddress::new(a, b, c, d, e, f)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(addr: MacAddress) -> Self {
        addr.octets()
    }
}

impl From<MacAddress> for u64 {
    fn from(addr: MacAddress) -> Self {
        addr.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MacAddressVisitor;

        impl serde::de::Visitor<'_> for MacAddressVisitor {
            type Value = MacAddress;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a MAC address such as `AA:BB:CC:DD:EE:FF`")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<MacAddress, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MacAddressVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octets_round_trip() {
        let addr = MacAddress::new(0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01);

        assert_eq!(addr.as_u64(), 0x84627a03bd01);
        assert_eq!(addr.octets(), [0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01]);
        assert_eq!(MacAddress::from(addr.octets()), addr);
        assert_eq!(MacAddress::from_u64(0xFFFF_8462_7a03_bd01), addr);
    }

    #[test]
    fn display_and_hex() {
        let addr = MacAddress::from_u64(0x84627a03bd01);

        assert_eq!(addr.to_string(), "84:62:7A:03:BD:01");
        assert_eq!(format!("{addr:X}"), "84:62:7A:03:BD:01");
        assert_eq!(format!("{addr:x}"), "84:62:7a:03:bd:01");
        assert_eq!(format!("[{addr:>19}]"), "[  84:62:7A:03:BD:01]");
        assert_eq!(
            addr.to_string_with(&FormatConfig::DEFAULT.with_delimiter(b'-')),
            "84-62-7A-03-BD-01"
        );
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!(
            "84:62:7a:03:bd:01".parse::<MacAddress>(),
            Ok(MacAddress::from_u64(0x84627a03bd01))
        );
        assert_eq!(
            "84:62:7a:03:bd:01\n".parse::<MacAddress>(),
            Err(Error::TrailingBytes(18))
        );
        assert_eq!("84:62".parse::<MacAddress>(), Err(Error::TooShort(5)));
        assert_eq!(
            "84.62.7a.03.bd.01".parse::<MacAddress>(),
            Err(Error::DelimiterMismatch {
                offset: 2,
                expected: b':',
                found: b'.',
            })
        );
    }

    #[test]
    fn parse_str_with_custom_delimiter() {
        let config = ParseConfig::STRICT.with_delimiter(b'-');

        assert_eq!(
            MacAddress::parse_str("01-23-45-67-89-AB", &config),
            Some(MacAddress::from_u64(0x0123456789AB))
        );
        assert_eq!(MacAddress::parse_str("01:23:45:67:89:AB", &config), None);
    }
}
