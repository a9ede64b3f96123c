use super::protocol_version::ProtocolVersion;
use super::ByteStream;
use crate::tls::error::Result;
use std::fmt::{Debug, Formatter};
use tlsprobe_macros::IntoRepr;

/// Size of the record header: content type, version, body length.
pub const RECORD_HEADER_LEN: usize = 5;

#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoRepr)]
pub enum ContentType {
    ChangeCipherSpec = 20, // 0x14
    Alert = 21,            // 0x15
    Handshake = 22,        // 0x16
    ApplicationData = 23,  // 0x17
}

impl ContentType {
    /// Unknown content types are not an error at this layer; the dispatcher
    /// decides whether to skip the record.
    pub fn from_byte(value: u8) -> Option<ContentType> {
        match value {
            20 => Some(ContentType::ChangeCipherSpec),
            21 => Some(ContentType::Alert),
            22 => Some(ContentType::Handshake),
            23 => Some(ContentType::ApplicationData),
            _ => None,
        }
    }
}

/// The outermost framing unit of TLS. The content type is kept raw so that
/// records of unrecognized types can still be framed, logged and skipped.
pub struct RecordHeader {
    pub content_type: u8,
    pub version: ProtocolVersion,
    pub length: u16,
}

impl RecordHeader {
    pub fn read(stream: &mut ByteStream<'_>) -> Result<RecordHeader> {
        let content_type = stream.read_number(1)? as u8;
        let version = ProtocolVersion {
            major: stream.read_number(1)? as u8,
            minor: stream.read_number(1)? as u8,
        };
        let length = stream.read_number(2)? as u16;

        Ok(RecordHeader {
            content_type,
            version,
            length,
        })
    }

    /// Record length including the header itself.
    pub fn total_len(&self) -> usize {
        self.length as usize + RECORD_HEADER_LEN
    }
}

impl Debug for RecordHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match ContentType::from_byte(self.content_type) {
            Some(ct) => write!(
                f,
                "{:?}, RecordHeader {{ length {:04x}, content-type: {:?} }}",
                self.version, self.length, ct
            ),
            None => write!(
                f,
                "{:?}, RecordHeader {{ length {:04x}, content-type: {:02x} (unknown) }}",
                self.version, self.length, self.content_type
            ),
        }
    }
}
