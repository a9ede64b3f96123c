use super::ByteStream;
use crate::tls::error::Result;

/// The type can be decoded from a byte stream.
pub trait ReadableFromStream: Sized {
    /// Produce a value of `Self` by consuming bytes from `stream`. Consumes
    /// exactly the bytes belonging to the value; trailing bytes stay in the
    /// stream for the caller.
    fn read(stream: &mut ByteStream<'_>) -> Result<Self>;
}

impl ReadableFromStream for u8 {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        Ok(stream.read_bytes(1)?[0])
    }
}

impl ReadableFromStream for u16 {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        Ok(stream.read_number(2)? as u16)
    }
}

impl ReadableFromStream for u32 {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        Ok(stream.read_number(4)? as u32)
    }
}

impl<const N: usize> ReadableFromStream for [u8; N] {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(stream.read_bytes(N)?);
        Ok(arr)
    }
}
