#[cfg(feature = "std")]
use thiserror::Error;

/// Conversion errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// Read starts at or past the end of the buffer
    #[cfg_attr(feature = "std", error("Index {index} out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },

    /// Text window does not fit the buffer
    #[cfg_attr(
        feature = "std",
        error("Range {start}..{end} out of bounds for length {len}")
    )]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Character has no single-byte representation
    #[cfg_attr(
        feature = "std",
        error("Character {ch:?} at position {position} is not encodable as one byte")
    )]
    Unencodable { ch: char, position: usize },

    /// 16-bit code is a lone surrogate, not a `char`
    #[cfg_attr(feature = "std", error("Code unit {0:#06x} is not a valid char"))]
    InvalidChar(u16),
}

pub type Result<T> = core::result::Result<T, ConvertError>;

impl ConvertError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(index, len, "decode index out of bounds");

        ConvertError::OutOfBounds { index, len }
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(start, end, len, "text range out of bounds");

        ConvertError::InvalidRange { start, end, len }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConvertError::OutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            ConvertError::InvalidRange { start, end, len } => {
                write!(f, "Range {}..{} out of bounds for length {}", start, end, len)
            }
            ConvertError::Unencodable { ch, position } => write!(
                f,
                "Character {:?} at position {} is not encodable as one byte",
                ch, position
            ),
            ConvertError::InvalidChar(code) => {
                write!(f, "Code unit {:#06x} is not a valid char", code)
            }
        }
    }
}
