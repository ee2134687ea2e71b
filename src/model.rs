use core::fmt;

use crate::{
    constants::{
        BLOCK_TERMINATOR, COMMENT_EXTENSION_LABEL, DESCRIPTOR_INTRODUCER, EXTENSION_INTRODUCER,
        GRAPHIC_CONTROL_LABEL, LOOP_BLOCK_LABEL, LZ_MAX_BITS, LZ_MAX_CODE, TERMINATOR_INTRODUCER,
    },
    error::FormatError,
    model::sealed::Sealed,
};

mod sealed {
    pub trait Sealed {}
}

/// A byte-valued marker from the GIF stream vocabulary.
pub trait Marker: Sealed + Copy + Sized + 'static {
    /// Every variant, in ascending byte order.
    const ALL: &'static [Self];

    fn byte(self) -> u8;
    fn from_byte(byte: u8) -> Result<Self, FormatError>;
}

/// Top-level block introducers.
///
/// The introducer decides the layout of every byte up to the next introducer, so an unknown one
/// leaves nothing sensible to resume parsing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Block {
    Extension = EXTENSION_INTRODUCER,
    Descriptor = DESCRIPTOR_INTRODUCER,
    Trailer = TERMINATOR_INTRODUCER,
}

/// Extension sub-type labels, read after [`Block::Extension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExtensionLabel {
    /// Four byte body carrying disposal, delay and transparency.
    GraphicControl = GRAPHIC_CONTROL_LABEL,
    Comment = COMMENT_EXTENSION_LABEL,
    /// Application block, used by NETSCAPE2.0 for the animation loop count.
    Application = LOOP_BLOCK_LABEL,
}

impl Sealed for Block {}
impl Sealed for ExtensionLabel {}

impl Marker for Block {
    const ALL: &'static [Self] = &[Block::Extension, Block::Descriptor, Block::Trailer];

    #[inline]
    fn byte(self) -> u8 {
        self as u8
    }

    #[inline]
    fn from_byte(byte: u8) -> Result<Self, FormatError> {
        match byte {
            EXTENSION_INTRODUCER => Ok(Block::Extension),
            DESCRIPTOR_INTRODUCER => Ok(Block::Descriptor),
            TERMINATOR_INTRODUCER => Ok(Block::Trailer),
            found => Err(FormatError::UnknownBlock { found }),
        }
    }
}

impl Marker for ExtensionLabel {
    const ALL: &'static [Self] = &[
        ExtensionLabel::GraphicControl,
        ExtensionLabel::Comment,
        ExtensionLabel::Application,
    ];

    #[inline]
    fn byte(self) -> u8 {
        self as u8
    }

    #[inline]
    fn from_byte(byte: u8) -> Result<Self, FormatError> {
        match byte {
            GRAPHIC_CONTROL_LABEL => Ok(ExtensionLabel::GraphicControl),
            COMMENT_EXTENSION_LABEL => Ok(ExtensionLabel::Comment),
            LOOP_BLOCK_LABEL => Ok(ExtensionLabel::Application),
            found => Err(FormatError::UnknownExtension { found }),
        }
    }
}

impl TryFrom<u8> for Block {
    type Error = FormatError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte)
    }
}

impl TryFrom<u8> for ExtensionLabel {
    type Error = FormatError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte)
    }
}

impl From<Block> for u8 {
    fn from(block: Block) -> u8 {
        block.byte()
    }
}

impl From<ExtensionLabel> for u8 {
    fn from(label: ExtensionLabel) -> u8 {
        label.byte()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Block::Extension => "extension",
            Block::Descriptor => "image descriptor",
            Block::Trailer => "trailer",
        })
    }
}

impl fmt::Display for ExtensionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExtensionLabel::GraphicControl => "graphic control",
            ExtensionLabel::Comment => "comment",
            ExtensionLabel::Application => "application",
        })
    }
}

/// A zero length sub-block ends the sequence.
#[inline]
pub const fn is_block_terminator(len: u8) -> bool {
    len == BLOCK_TERMINATOR
}

/// Largest code representable in `bits` bits.
pub const fn code_limit(bits: u8) -> Result<u16, FormatError> {
    if bits == 0 || bits > LZ_MAX_BITS {
        return Err(FormatError::CodeWidthOutOfRange { bits });
    }
    Ok(((1u32 << bits as u32) - 1) as u16)
}

#[inline]
pub const fn check_code(code: u16) -> Result<u16, FormatError> {
    if code > LZ_MAX_CODE {
        return Err(FormatError::CodeOutOfRange { code });
    }
    Ok(code)
}
