use core::fmt;

use crate::{REQUEST_ID_HEX_LEN, RequestId};

/// A stack buffer holding the lowercase hex form of a [`RequestId`].
///
/// The formatter is a zero-allocation view that implements
/// [`core::fmt::Display`] and [`AsRef<str>`], and compares equal to string
/// slices.
///
/// # Example
///
/// ```
/// use macid::RequestId;
///
/// let id = RequestId::from_bytes([0x59, 0xc7, 0x41, 0xc4, 0xe6, 0xed, 0xc1, 0xfa, 0, 0, 0, 1]);
/// let formatter = id.encode();
///
/// assert_eq!(formatter, "59c741c4e6edc1fa00000001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexFormatter {
    buf: [u8; REQUEST_ID_HEX_LEN],
}

impl HexFormatter {
    pub fn new(id: &RequestId) -> Self {
        let mut buf = [0u8; REQUEST_ID_HEX_LEN];
        super::encode_hex(id.as_bytes(), &mut buf);
        Self { buf }
    }

    /// Returns a `&str` view of the hex encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only ASCII characters from the hex alphabet
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Consumes the formatter and returns the raw ASCII buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; REQUEST_ID_HEX_LEN] {
        self.buf
    }
}

impl fmt::Display for HexFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for HexFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for HexFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for HexFormatter {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}
