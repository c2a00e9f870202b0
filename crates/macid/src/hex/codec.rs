use crate::HexError;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";
const NO_VALUE: u8 = 255;

/// Lookup table for hex decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 16 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    lut
};

/// Encodes `input` as lowercase hex into `buf`.
///
/// `buf` must be exactly twice as long as `input`; callers guarantee this with
/// fixed-size arrays.
#[inline]
pub fn encode_hex(input: &[u8], buf: &mut [u8]) {
    debug_assert_eq!(buf.len(), input.len() * 2);
    for (pair, &b) in buf.chunks_exact_mut(2).zip(input) {
        pair[0] = ALPHABET[usize::from(b >> 4)];
        pair[1] = ALPHABET[usize::from(b & 0x0F)];
    }
}

/// Decodes a hex string into `out`, accepting either letter case.
///
/// The length of `encoded` must already have been checked against
/// `out.len() * 2`.
#[inline]
pub fn decode_hex(encoded: &[u8], out: &mut [u8]) -> Result<(), HexError> {
    debug_assert_eq!(encoded.len(), out.len() * 2);
    for (i, (pair, slot)) in encoded.chunks_exact(2).zip(out.iter_mut()).enumerate() {
        let hi = LOOKUP[usize::from(pair[0])];
        if hi == NO_VALUE {
            return Err(HexError::InvalidAscii {
                byte: pair[0],
                index: i * 2,
            });
        }
        let lo = LOOKUP[usize::from(pair[1])];
        if lo == NO_VALUE {
            return Err(HexError::InvalidAscii {
                byte: pair[1],
                index: i * 2 + 1,
            });
        }
        *slot = (hi << 4) | lo;
    }
    Ok(())
}

/// Returns `true` if every byte of `encoded` is a hex digit.
#[inline]
pub fn is_hex(encoded: &[u8]) -> bool {
    encoded.iter().all(|&b| LOOKUP[usize::from(b)] != NO_VALUE)
}
