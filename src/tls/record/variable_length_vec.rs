use super::readable_from_stream::ReadableFromStream;
use super::writable_to_sink::{Sink, WritableToSink};
use super::ByteStream;
use crate::tls::error::{Result, TlsError};
use std::fmt::{Debug, Formatter};
use std::ops::Deref;

/// A TLS variable-length vector: the contents preceded by their length in
/// bytes, big-endian, in as many bytes as it takes to represent `MAX`.
///
/// `MIN` and `MAX` bound the length in *bytes*, not in elements. Examples:
/// `MIN=0, MAX=255` gives a 1-byte length field, `MIN=0, MAX=65535` a 2-byte
/// field, `MIN=0, MAX=16777215` a 3-byte field.
pub struct VariableLengthVec<T, const MIN: usize, const MAX: usize>(Vec<T>);

const fn length_field_width(max: usize) -> usize {
    let mut width = 1;
    let mut limit = 0xff;
    while max > limit {
        width += 1;
        limit = (limit << 8) | 0xff;
    }
    width
}

impl<T, const MIN: usize, const MAX: usize> VariableLengthVec<T, MIN, MAX> {
    fn check_length(length: usize) -> Result<()> {
        if length < MIN || length > MAX {
            Err(TlsError::LengthOutOfRange {
                length,
                min: MIN,
                max: MAX,
            })
        } else {
            Ok(())
        }
    }
}

impl<T, const MAX: usize> VariableLengthVec<T, 0, MAX> {
    /// Only available when `MIN` is 0.
    pub fn new_empty() -> Self {
        VariableLengthVec(Vec::new())
    }
}

impl<T, const MIN: usize, const MAX: usize> ReadableFromStream for VariableLengthVec<T, MIN, MAX>
where
    T: ReadableFromStream,
{
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        let length_in_bytes = stream.read_number(length_field_width(MAX))? as usize;
        Self::check_length(length_in_bytes)?;

        // parse elements from a sub-stream so that an element cannot consume
        // bytes beyond the declared length
        let mut contents = ByteStream::new(stream.read_bytes(length_in_bytes)?);
        let mut res = Vec::new();

        while contents.rest_len() > 0 {
            res.push(T::read(&mut contents)?);
        }

        Ok(VariableLengthVec(res))
    }
}

impl<T, const MIN: usize, const MAX: usize> WritableToSink for VariableLengthVec<T, MIN, MAX>
where
    T: WritableToSink,
{
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        // the length is only known once the contents are encoded, so encode
        // into a scratch buffer first and prefix its length afterwards
        let mut content_buf: Vec<u8> = Vec::new();

        for el in self.iter() {
            el.write(&mut content_buf)?;
        }

        Self::check_length(content_buf.len())?;

        let length = super::codec::number_to_bytes(content_buf.len() as u64, length_field_width(MAX));
        buffer.extend_from_slice(&length);
        buffer.append(content_buf);
        Ok(())
    }
}

impl<T, const MIN: usize, const MAX: usize> Deref for VariableLengthVec<T, MIN, MAX> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const MIN: usize, const MAX: usize> From<Vec<T>> for VariableLengthVec<T, MIN, MAX> {
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T, const MIN: usize, const MAX: usize> From<VariableLengthVec<T, MIN, MAX>> for Vec<T> {
    fn from(value: VariableLengthVec<T, MIN, MAX>) -> Self {
        value.0
    }
}

impl<T: Clone, const MIN: usize, const MAX: usize> Clone for VariableLengthVec<T, MIN, MAX> {
    fn clone(&self) -> Self {
        VariableLengthVec(self.0.clone())
    }
}

impl<T: PartialEq, const MIN: usize, const MAX: usize> PartialEq
    for VariableLengthVec<T, MIN, MAX>
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Debug, const MIN: usize, const MAX: usize> Debug for VariableLengthVec<T, MIN, MAX> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
