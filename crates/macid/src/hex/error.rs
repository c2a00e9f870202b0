use core::fmt;

/// Errors produced while decoding the hex form of a
/// [`RequestId`](crate::RequestId).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum HexError {
    /// The input was not exactly [`REQUEST_ID_HEX_LEN`](crate::REQUEST_ID_HEX_LEN)
    /// bytes long.
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contained a byte outside `0-9`, `a-f` and `A-F`.
    InvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Position of the offending byte in the input.
        index: usize,
    },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(f, "invalid hex length: {len}"),
            Self::InvalidAscii { byte, index } => {
                write!(f, "invalid hex byte {byte:#04x} at index {index}")
            }
        }
    }
}

impl core::error::Error for HexError {}
