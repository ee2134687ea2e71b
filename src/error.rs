use thiserror::Error;

use crate::constants::{LZ_MAX_BITS, LZ_MAX_CODE};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("unrecognized block introducer 0x{found:02x}")]
    UnknownBlock { found: u8 },
    #[error("unrecognized extension label 0x{found:02x}")]
    UnknownExtension { found: u8 },
    #[error("lzw code {code} exceeds {max}", max = LZ_MAX_CODE)]
    CodeOutOfRange { code: u16 },
    #[error("lzw code width {bits} outside 1..={max}", max = LZ_MAX_BITS)]
    CodeWidthOutOfRange { bits: u8 },
}
