//! Every vector backend must agree with the scalar reference on every input.
use macad::{scalar, Backend, FormatConfig, ParseConfig, BLOCK_LEN, MAC_STR_LEN};
use proptest::prelude::*;

fn parse_config() -> impl Strategy<Value = ParseConfig> {
    (any::<bool>(), any::<bool>(), any::<u8>()).prop_map(|(delimiters, hex, delimiter)| {
        ParseConfig::DEFAULT
            .with_delimiter_validation(delimiters)
            .with_hex_validation(hex)
            .with_delimiter(delimiter)
    })
}

fn format_config() -> impl Strategy<Value = FormatConfig> {
    (0u8..0x80, any::<bool>()).prop_map(|(delimiter, uppercase)| {
        FormatConfig::DEFAULT
            .with_delimiter(delimiter)
            .with_uppercase(uppercase)
    })
}

/// Blocks that look like addresses often enough to get past validation.
fn block() -> impl Strategy<Value = [u8; BLOCK_LEN]> {
    let byte = prop_oneof![
        4 => proptest::sample::select(b"0123456789abcdefABCDEF:-".to_vec()),
        1 => any::<u8>(),
    ];
    proptest::array::uniform32(byte)
}

proptest! {
    #[test]
    fn parse_matches_scalar(block in block(), config in parse_config()) {
        let expected = scalar::parse_block(&block, &config);

        for backend in Backend::supported() {
            prop_assert_eq!(backend.parse_block(&block, &config), expected, "{}", backend);
        }
        prop_assert_eq!(macad::parse_block(&block, &config), expected);
    }

    #[test]
    fn parse_matches_scalar_on_raw_bytes(block in any::<[u8; BLOCK_LEN]>(), config in parse_config()) {
        let expected = scalar::parse_block(&block, &config);

        for backend in Backend::supported() {
            prop_assert_eq!(backend.parse_block(&block, &config), expected, "{}", backend);
        }
    }

    #[test]
    fn format_matches_scalar(value in any::<u64>(), config in format_config()) {
        let expected = scalar::encode(value, &config);

        for backend in Backend::supported() {
            prop_assert_eq!(backend.encode(value, &config), expected, "{}", backend);
        }
        prop_assert_eq!(macad::encode(value, &config), expected);
    }

    #[test]
    fn validate_agrees_with_parse(block in block(), len in 0..=BLOCK_LEN, config in parse_config()) {
        let input = &block[..len];

        prop_assert_eq!(macad::validate(input, &config).is_ok(), macad::parse(input, &config).is_some());
    }

    #[test]
    fn round_trip(value in 0u64..=macad::MAC_MASK, config in format_config()) {
        let text = macad::format(value, &config);
        let parse = ParseConfig::STRICT.with_delimiter(config.delimiter());

        prop_assert_eq!(text.len(), MAC_STR_LEN);
        prop_assert_eq!(macad::parse(&text, &ParseConfig::DEFAULT.with_delimiter(config.delimiter())), Some(value));
        prop_assert_eq!(macad::parse(&text, &parse), Some(value));
    }

    #[test]
    fn trailing_bytes_are_ignored(value in 0u64..=macad::MAC_MASK, tail in proptest::collection::vec(any::<u8>(), 0..40)) {
        let mut input = macad::encode(value, &FormatConfig::DEFAULT).to_vec();
        input.extend_from_slice(&tail);

        prop_assert_eq!(macad::parse(&input, &ParseConfig::STRICT), Some(value));
    }

    #[test]
    fn any_non_hex_digit_is_rejected(value in 0u64..=macad::MAC_MASK, slot in 0usize..12, byte in any::<u8>()) {
        prop_assume!(!byte.is_ascii_hexdigit());
        let offsets = [0, 1, 3, 4, 6, 7, 9, 10, 12, 13, 15, 16];
        let mut text = macad::encode(value, &FormatConfig::DEFAULT);
        text[offsets[slot]] = byte;

        prop_assert_eq!(macad::parse(text, &ParseConfig::DEFAULT.with_hex_validation(true)), None);
        prop_assert!(macad::parse(text, &ParseConfig::DEFAULT).is_some());
    }

    #[test]
    fn any_wrong_delimiter_is_rejected(value in 0u64..=macad::MAC_MASK, slot in 0usize..5, byte in any::<u8>()) {
        prop_assume!(byte != b':');
        let mut text = macad::encode(value, &FormatConfig::DEFAULT);
        text[[2, 5, 8, 11, 14][slot]] = byte;

        prop_assert_eq!(macad::parse(text, &ParseConfig::DEFAULT.with_delimiter_validation(true)), None);
        prop_assert_eq!(macad::parse(text, &ParseConfig::DEFAULT), Some(value));
    }
}
