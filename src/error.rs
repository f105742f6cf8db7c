#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Expected at least 17 bytes of input. Received `{0}`")]
    TooShort(usize),
    #[error("Expected exactly 17 bytes of input. Received `{0}`")]
    TrailingBytes(usize),
    #[error("Expected delimiter `{}` at offset `{offset}`. Received `{}`", .expected.escape_ascii(), .found.escape_ascii())]
    DelimiterMismatch { offset: usize, expected: u8, found: u8 },
    #[error("Expected a hexadecimal digit at offset `{offset}`. Received `{}`", .found.escape_ascii())]
    InvalidHexDigit { offset: usize, found: u8 },
    #[error("Output buffer must hold 17 bytes. Received capacity `{0}`")]
    BufferTooSmall(usize),
    #[error("Delimiter must be a single ASCII byte. Received `{0:#04x}`")]
    NonAsciiDelimiter(u8),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_escape_raw_bytes() {
        let error = Error::InvalidHexDigit {
            offset: 16,
            found: b'\n',
        };

        assert_eq!(
            error.to_string(),
            "Expected a hexadecimal digit at offset `16`. Received `\\n`"
        );
    }

    #[test]
    fn messages_name_expected_delimiter() {
        let error = Error::DelimiterMismatch {
            offset: 2,
            expected: b':',
            found: b'-',
        };

        assert_eq!(
            error.to_string(),
            "Expected delimiter `:` at offset `2`. Received `-`"
        );
    }
}
