use super::codec;
use crate::tls::error::{Result, TlsError};

/// A forward-only cursor over an immutable byte buffer.
///
/// Running past the end is an error (`TruncatedInput`), never a silent short
/// read. One stream is owned by exactly one parse at a time.
pub struct ByteStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteStream { data, pos: 0 }
    }

    /// Bytes remaining between the cursor and the end of the buffer.
    pub fn rest_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.rest_len() < n {
            return Err(TlsError::TruncatedInput {
                needed: n,
                remaining: self.rest_len(),
            });
        }

        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Reads `n` bytes as a big-endian unsigned integer. `n` must be at most
    /// [`codec::MAX_NUMBER_WIDTH`].
    pub fn read_number(&mut self, n: usize) -> Result<u64> {
        if n > codec::MAX_NUMBER_WIDTH {
            return Err(TlsError::NumberOverflow { length: n });
        }
        codec::bytes_to_number(self.read_bytes(n)?)
    }

    /// Advances the cursor by `n` bytes without returning data.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n)?;
        Ok(())
    }
}
