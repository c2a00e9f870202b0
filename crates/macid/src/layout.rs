//! Byte layout of a [`RequestId`](crate::RequestId) and raw field accessors.
//!
//! ```text
//!  Byte:   0        4          8          12
//!          +--------+----------+----------+
//!  Field:  |  time  | machine  | sequence |
//!          +--------+----------+----------+
//!          |<-- big-endian, 12 bytes ---->|
//! ```
//!
//! The accessors in this module work on arbitrary byte slices and treat a
//! slice of the wrong length as a bug in the caller: they panic rather than
//! return an error. Untrusted input belongs at the fallible boundary instead,
//! i.e. [`RequestId::valid`](crate::RequestId::valid),
//! [`RequestId::from_slice`](crate::RequestId::from_slice) and
//! [`RequestId::from_hex`](crate::RequestId::from_hex).

/// Number of bytes in a request id.
pub const REQUEST_ID_BYTES: usize = 12;

/// Number of characters in the hex form of a request id.
pub const REQUEST_ID_HEX_LEN: usize = REQUEST_ID_BYTES * 2;

/// Width of each of the three fields, in bytes.
pub const FIELD_BYTES: usize = 4;

/// Offset of the big-endian Unix-seconds timestamp.
pub const TIMESTAMP_OFFSET: usize = 0;

/// Offset of the machine fingerprint.
pub const MACHINE_OFFSET: usize = TIMESTAMP_OFFSET + FIELD_BYTES;

/// Offset of the big-endian sequence counter.
pub const SEQUENCE_OFFSET: usize = MACHINE_OFFSET + FIELD_BYTES;

const _: () = assert!(SEQUENCE_OFFSET + FIELD_BYTES == REQUEST_ID_BYTES);

/// Returns the timestamp field of `bytes` as Unix seconds.
///
/// # Panics
///
/// Panics if `bytes` is not exactly [`REQUEST_ID_BYTES`] long.
#[track_caller]
#[must_use]
pub fn timestamp(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(field(bytes, TIMESTAMP_OFFSET))
}

/// Returns the raw machine fingerprint of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` is not exactly [`REQUEST_ID_BYTES`] long.
#[track_caller]
#[must_use]
pub fn machine(bytes: &[u8]) -> [u8; FIELD_BYTES] {
    field(bytes, MACHINE_OFFSET)
}

/// Returns the sequence field of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` is not exactly [`REQUEST_ID_BYTES`] long.
#[track_caller]
#[must_use]
pub fn sequence(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(field(bytes, SEQUENCE_OFFSET))
}

/// Packs the three fields into their wire layout.
#[must_use]
pub const fn assemble(
    timestamp: u32,
    machine: [u8; FIELD_BYTES],
    sequence: u32,
) -> [u8; REQUEST_ID_BYTES] {
    let t = timestamp.to_be_bytes();
    let s = sequence.to_be_bytes();
    [
        t[0], t[1], t[2], t[3], //
        machine[0], machine[1], machine[2], machine[3], //
        s[0], s[1], s[2], s[3],
    ]
}

#[track_caller]
fn field(bytes: &[u8], offset: usize) -> [u8; FIELD_BYTES] {
    assert!(
        bytes.len() == REQUEST_ID_BYTES,
        "invalid RequestId: {bytes:02x?}"
    );
    let mut out = [0u8; FIELD_BYTES];
    out.copy_from_slice(&bytes[offset..offset + FIELD_BYTES]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: [u8; REQUEST_ID_BYTES] = [
        0x59, 0xc7, 0x41, 0xc4, 0xe6, 0xed, 0xc1, 0xfa, 0xff, 0xff, 0xff, 0xff,
    ];

    #[test]
    fn accessors_read_big_endian_fields() {
        assert_eq!(timestamp(&RAW), 1_506_230_724);
        assert_eq!(machine(&RAW), [0xe6, 0xed, 0xc1, 0xfa]);
        assert_eq!(sequence(&RAW), u32::MAX);
    }

    #[test]
    fn assemble_matches_accessors() {
        let raw = assemble(0x0102_0304, [9, 8, 7, 6], 0x0a0b_0c0d);
        assert_eq!(raw, [1, 2, 3, 4, 9, 8, 7, 6, 0x0a, 0x0b, 0x0c, 0x0d]);
        assert_eq!(timestamp(&raw), 0x0102_0304);
        assert_eq!(machine(&raw), [9, 8, 7, 6]);
        assert_eq!(sequence(&raw), 0x0a0b_0c0d);
    }

    #[test]
    #[should_panic(expected = "invalid RequestId")]
    fn accessor_panics_on_short_buffer() {
        let _ = timestamp(&RAW[..11]);
    }

    #[test]
    #[should_panic(expected = "invalid RequestId")]
    fn accessor_panics_on_long_buffer() {
        let mut long = [0u8; 13];
        long[..12].copy_from_slice(&RAW);
        let _ = sequence(&long);
    }
}
