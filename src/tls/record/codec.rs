//! Conversions between unsigned integers and big-endian byte sequences.
//!
//! TLS mixes two encodings: fixed-width fields (lengths inside the record and
//! handshake headers) and minimal-width sequences left-padded to a field
//! width. `number_to_bytes` covers both by taking the minimum width
//! explicitly.

use crate::tls::error::{Result, TlsError};

/// Integers longer than this many bytes do not reliably round-trip through a
/// u64 here; callers that need them must keep the raw byte sequence instead.
pub const MAX_NUMBER_WIDTH: usize = 6;

/// Encodes `value` as the minimal big-endian byte sequence, left-zero-padded
/// to `min_width` bytes if shorter. Zero encodes as the empty sequence before
/// padding, so `number_to_bytes(0, 2)` is `[0, 0]` and
/// `number_to_bytes(0, 0)` is empty.
pub fn number_to_bytes(value: u64, min_width: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut rest = value;

    while rest > 0 {
        bytes.insert(0, (rest & 0xff) as u8);
        rest >>= 8;
    }

    while bytes.len() < min_width {
        bytes.insert(0, 0);
    }

    bytes
}

/// Decodes a big-endian byte sequence into an unsigned integer. Sequences
/// longer than [`MAX_NUMBER_WIDTH`] fail with `NumberOverflow`.
pub fn bytes_to_number(bytes: &[u8]) -> Result<u64> {
    if bytes.len() > MAX_NUMBER_WIDTH {
        return Err(TlsError::NumberOverflow {
            length: bytes.len(),
        });
    }

    let mut value: u64 = 0;
    for &b in bytes {
        value = (value << 8) | b as u64;
    }

    Ok(value)
}
