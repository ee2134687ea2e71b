pub const BLOCK_TERMINATOR: u8 = 0x00;

pub const EXTENSION_INTRODUCER: u8 = 0x21; // '!'
pub const DESCRIPTOR_INTRODUCER: u8 = 0x2c; // ','
pub const TERMINATOR_INTRODUCER: u8 = 0x3b; // ';'

pub const GRAPHIC_CONTROL_LABEL: u8 = 0xf9;
pub const COMMENT_EXTENSION_LABEL: u8 = 0xfe;
pub const LOOP_BLOCK_LABEL: u8 = 0xff;

pub const LZ_MAX_CODE: u16 = 4095;
pub const LZ_MAX_BITS: u8 = 12;
pub const LZ_TABLE_SIZE: usize = LZ_MAX_CODE as usize + 1;

const _: () = assert!(LZ_MAX_CODE as u32 == (1u32 << LZ_MAX_BITS as u32) - 1);
const _: () = assert!(
    EXTENSION_INTRODUCER != DESCRIPTOR_INTRODUCER
        && EXTENSION_INTRODUCER != TERMINATOR_INTRODUCER
        && DESCRIPTOR_INTRODUCER != TERMINATOR_INTRODUCER
        && BLOCK_TERMINATOR != EXTENSION_INTRODUCER
        && BLOCK_TERMINATOR != DESCRIPTOR_INTRODUCER
        && BLOCK_TERMINATOR != TERMINATOR_INTRODUCER
);
const _: () = assert!(
    GRAPHIC_CONTROL_LABEL != COMMENT_EXTENSION_LABEL
        && GRAPHIC_CONTROL_LABEL != LOOP_BLOCK_LABEL
        && COMMENT_EXTENSION_LABEL != LOOP_BLOCK_LABEL
);
