//! GIF89a stream vocabulary: block introducers, extension labels and LZW code-space limits.
pub use crate::constants::*;
pub use crate::error::FormatError;
pub use crate::model::{Block, ExtensionLabel, Marker, check_code, code_limit, is_block_terminator};

mod constants;
mod error;
mod model;
