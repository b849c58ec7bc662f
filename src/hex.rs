//! Lowercase hexadecimal codec for single bytes.
//!
//! Encoding reads a 256-entry table computed at compile time; decoding uses plain range matches so
//! that neither direction allocates or branches on a lookup structure.

/// Hex pairs for every byte value, lowercase.
const ENCODE_TABLE: [[u8; 2]; 256] = {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [DIGITS[i >> 4], DIGITS[i & 15]];
        i += 1;
    }
    table
};

/// Returns the two lowercase ASCII hex digits representing `value`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(&timesorted::hex::encode_byte(0xa7), b"a7");
/// ```
#[inline]
pub const fn encode_byte(value: u8) -> [u8; 2] {
    ENCODE_TABLE[value as usize]
}

/// Returns the numeric value of a single ASCII hex digit, accepting both cases.
#[inline]
pub const fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes the byte represented by the hex digits `hi` and `lo`, or returns `None` if either is
/// outside `[0-9a-fA-F]`.
///
/// # Examples
///
/// ```rust
/// use timesorted::hex::decode_pair;
///
/// assert_eq!(decode_pair(b'a', b'7'), Some(0xa7));
/// assert_eq!(decode_pair(b'A', b'7'), Some(0xa7));
/// assert_eq!(decode_pair(b'g', b'7'), None);
/// ```
#[inline]
pub const fn decode_pair(hi: u8, lo: u8) -> Option<u8> {
    match (decode_digit(hi), decode_digit(lo)) {
        (Some(h), Some(l)) => Some((h << 4) | l),
        _ => None,
    }
}
