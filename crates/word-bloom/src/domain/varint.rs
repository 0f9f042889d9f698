//! Little-endian base-128 unsigned varint decoding

use crate::error::VarintError;

/// Maximum encoded length of a 64-bit varint
pub const MAX_VARINT_LEN64: usize = 10;

/// Decode an unsigned varint from the start of `data`
///
/// Returns the value and the number of bytes consumed. On failure the
/// error carries the bits accumulated so far.
pub fn decode_uvarint(data: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut x = 0u64;
    let mut s = 0u32;

    for (i, &b) in data.iter().take(MAX_VARINT_LEN64).enumerate() {
        if b < 0x80 {
            if i == MAX_VARINT_LEN64 - 1 && b > 1 {
                return Err(VarintError::Overflow { partial: x });
            }
            return Ok((x | (u64::from(b) << s), i + 1));
        }
        x |= u64::from(b & 0x7f) << s;
        s += 7;
    }

    if data.len() >= MAX_VARINT_LEN64 {
        Err(VarintError::Overflow { partial: x })
    } else {
        Err(VarintError::Truncated { partial: x })
    }
}
