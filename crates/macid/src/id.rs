use core::{fmt, str::FromStr};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{
    Error, HexError, HexFormatter, Result,
    hex::{decode_hex, is_hex},
    layout::{self, FIELD_BYTES, REQUEST_ID_BYTES, REQUEST_ID_HEX_LEN},
};

/// A 12-byte identifier made of a creation timestamp, a machine fingerprint
/// and a sequence number.
///
/// ```text
///  Byte:   0        4          8          12
///          +--------+----------+----------+
///  Field:  |  time  | machine  | sequence |
///          +--------+----------+----------+
/// ```
///
/// All fields are big-endian, so the derived ordering sorts ids by timestamp
/// first, then by machine, then by sequence. That makes sentinel ids from
/// [`RequestId::from_datetime`] usable as bounds in range queries.
///
/// A `RequestId` always holds exactly [`REQUEST_ID_BYTES`] bytes; buffers of
/// any other length are rejected by [`RequestId::from_slice`] and
/// [`RequestId::from_hex`] before a value exists.
///
/// Fresh ids come from a [`MacidGenerator`](crate::MacidGenerator).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RequestId {
    bytes: [u8; REQUEST_ID_BYTES],
}

impl RequestId {
    /// The all-zero id.
    pub const ZERO: Self = Self::from_bytes([0; REQUEST_ID_BYTES]);

    /// Wraps 12 raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; REQUEST_ID_BYTES]) -> Self {
        Self { bytes }
    }

    /// Builds an id from its three fields.
    #[must_use]
    pub const fn from_components(timestamp: u32, machine: [u8; FIELD_BYTES], sequence: u32) -> Self {
        Self::from_bytes(layout::assemble(timestamp, machine, sequence))
    }

    /// Builds a sentinel id carrying only `timestamp` (Unix seconds); machine
    /// and sequence are zero.
    ///
    /// # ⚠️ Note
    /// A sentinel is **not** unique. Use it only as a bound when looking for
    /// ids created before or after a point in time, never as a stored key.
    #[must_use]
    pub const fn from_timestamp(timestamp: u32) -> Self {
        Self::from_components(timestamp, [0; FIELD_BYTES], 0)
    }

    /// Builds a sentinel id from a [`SystemTime`], truncated to whole seconds.
    ///
    /// Times past `u32::MAX` seconds keep only their low 32 bits. Times
    /// before the Unix epoch do not wrap the same way: they clamp to zero, so
    /// a pre-1970 bound still sorts before every minted id.
    ///
    /// # ⚠️ Note
    /// See [`RequestId::from_timestamp`]: sentinels are range bounds only.
    #[must_use]
    pub fn from_datetime(datetime: SystemTime) -> Self {
        Self::from_timestamp(unix_secs(datetime))
    }

    /// Returns `true` if `bytes` has the length of a request id.
    ///
    /// ```
    /// use macid::RequestId;
    ///
    /// assert!(RequestId::valid(&[0u8; 12]));
    /// assert!(!RequestId::valid(&[0u8; 11]));
    /// assert!(!RequestId::valid(&[0u8; 13]));
    /// ```
    #[must_use]
    pub const fn valid(bytes: &[u8]) -> bool {
        bytes.len() == REQUEST_ID_BYTES
    }

    /// Copies a request id out of an untrusted byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `bytes` is not exactly
    /// [`REQUEST_ID_BYTES`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; REQUEST_ID_BYTES] = bytes
            .try_into()
            .map_err(|_| Error::InvalidLength { len: bytes.len() })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns `true` if `s` is the hex form of a request id: exactly
    /// [`REQUEST_ID_HEX_LEN`] characters, all hex digits.
    ///
    /// This is a syntactic check only and never builds a value.
    ///
    /// ```
    /// use macid::RequestId;
    ///
    /// assert!(RequestId::is_valid_hex("59c741c4e6edc1faffffffff"));
    /// assert!(!RequestId::is_valid_hex("59c741c4e6edc1fafffffff"));
    /// assert!(!RequestId::is_valid_hex("59c741c4e6edc1fafffffffx"));
    /// ```
    #[must_use]
    pub fn is_valid_hex(s: impl AsRef<str>) -> bool {
        let s = s.as_ref().as_bytes();
        s.len() == REQUEST_ID_HEX_LEN && is_hex(s)
    }

    /// Decodes the hex form of a request id. Either letter case is accepted.
    ///
    /// # Errors
    ///
    /// - [`HexError::InvalidLength`] if `s` is not exactly
    ///   [`REQUEST_ID_HEX_LEN`] bytes long. Input is never truncated or padded.
    /// - [`HexError::InvalidAscii`] if `s` contains a non-hex character.
    ///
    /// # Example
    ///
    /// ```
    /// use macid::RequestId;
    ///
    /// let id = RequestId::from_hex("59c741c4e6edc1faffffffff").unwrap();
    /// assert_eq!(id.timestamp(), 1_506_230_724);
    /// assert_eq!(id.machine(), [0xe6, 0xed, 0xc1, 0xfa]);
    /// assert_eq!(id.sequence(), u32::MAX);
    /// ```
    pub fn from_hex(s: impl AsRef<str>) -> Result<Self, HexError> {
        let s = s.as_ref().as_bytes();
        if s.len() != REQUEST_ID_HEX_LEN {
            return Err(HexError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0u8; REQUEST_ID_BYTES];
        decode_hex(s, &mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns a zero-allocation formatter over the lowercase hex form.
    #[must_use]
    pub fn encode(&self) -> HexFormatter {
        HexFormatter::new(self)
    }

    /// Returns the lowercase hex form as an owned [`String`].
    ///
    /// This is the canonical wire and query representation.
    #[must_use]
    pub fn hex(&self) -> String {
        self.encode().as_str().to_owned()
    }

    /// Returns the creation time as Unix seconds.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        layout::timestamp(&self.bytes)
    }

    /// Returns the creation time as a [`SystemTime`].
    ///
    /// # ⚠️ Note
    /// Precision is limited to whole seconds.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(u64::from(self.timestamp()))
    }

    /// Returns the 4-byte machine fingerprint.
    #[must_use]
    pub fn machine(&self) -> [u8; FIELD_BYTES] {
        layout::machine(&self.bytes)
    }

    /// Returns the sequence number.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        layout::sequence(&self.bytes)
    }

    /// Returns `true` if the machine and sequence fields are both zero, as
    /// they are for sentinels built by [`RequestId::from_timestamp`].
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.machine() == [0; FIELD_BYTES] && self.sequence() == 0
    }

    /// Borrows the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; REQUEST_ID_BYTES] {
        &self.bytes
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; REQUEST_ID_BYTES] {
        self.bytes
    }
}

/// Whole Unix seconds of `datetime` in the 32-bit field: zero before the
/// epoch, low 32 bits after it.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn unix_secs(datetime: SystemTime) -> u32 {
    datetime
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs() as u32
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_str())
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestIdHex(\"{}\")", self.encode())
    }
}

impl FromStr for RequestId {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for RequestId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl From<[u8; REQUEST_ID_BYTES]> for RequestId {
    fn from(bytes: [u8; REQUEST_ID_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<RequestId> for [u8; REQUEST_ID_BYTES] {
    fn from(id: RequestId) -> Self {
        id.to_bytes()
    }
}

impl AsRef<[u8]> for RequestId {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
