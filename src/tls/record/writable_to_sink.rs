use crate::tls::error::Result;

/// Receives encoded bytes. Implemented for `Vec<u8>`; kept as a trait so the
/// encoders do not care where the bytes end up.
pub trait Sink {
    fn push(&mut self, byte: u8);
    fn extend_from_slice(&mut self, src: &[u8]);
    fn append(&mut self, vec: Vec<u8>);
}

impl Sink for Vec<u8> {
    fn push(&mut self, byte: u8) {
        Vec::push(self, byte)
    }

    fn extend_from_slice(&mut self, src: &[u8]) {
        Vec::extend_from_slice(self, src)
    }

    fn append(&mut self, mut vec: Vec<u8>) {
        Vec::append(self, &mut vec)
    }
}

/// The type can be encoded to its TLS wire representation.
pub trait WritableToSink: Sized {
    /// Appends the wire bytes of this value to `buffer`. Returns an `Err`
    /// when the value cannot legally appear on the wire.
    fn write(&self, buffer: &mut impl Sink) -> Result<()>;
}

impl WritableToSink for u8 {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        buffer.push(*self);
        Ok(())
    }
}

impl WritableToSink for u16 {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        buffer.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }
}

impl WritableToSink for u32 {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        buffer.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }
}

impl<const N: usize> WritableToSink for [u8; N] {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        buffer.extend_from_slice(self);
        Ok(())
    }
}
