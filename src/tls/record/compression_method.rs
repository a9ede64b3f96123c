use tlsprobe_macros::{ReadableFromStream, WritableToSink};

#[repr(u8)]
#[derive(PartialEq, Eq, Debug, Clone, Copy, ReadableFromStream, WritableToSink)]
pub enum CompressionMethod {
    Null = 0,
}
