#![no_main]

use gif_markers::{
    Block, ExtensionLabel, FormatError, LZ_MAX_BITS, LZ_MAX_CODE, Marker, check_code, code_limit,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u16)| {
    let (byte, bits, code) = data;

    match Block::from_byte(byte) {
        Ok(block) => assert_eq!(byte, u8::from(block)),
        Err(e) => assert_eq!(FormatError::UnknownBlock { found: byte }, e),
    }
    match ExtensionLabel::from_byte(byte) {
        Ok(label) => assert_eq!(byte, u8::from(label)),
        Err(e) => assert_eq!(FormatError::UnknownExtension { found: byte }, e),
    }

    match code_limit(bits) {
        Ok(limit) => {
            assert!((1..=LZ_MAX_BITS).contains(&bits));
            assert!(limit <= LZ_MAX_CODE);
            assert_eq!(Ok(limit), check_code(limit));
        }
        Err(e) => assert_eq!(FormatError::CodeWidthOutOfRange { bits }, e),
    }

    assert_eq!(code <= LZ_MAX_CODE, check_code(code).is_ok());
});
