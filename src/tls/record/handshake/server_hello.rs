use super::extensions::Extension;
use super::handshake::HandshakeType;
use super::{Random, SessionId};
use crate::tls::error::Result;
use crate::tls::record::{
    ByteStream, CipherSuite, CompressionMethod, ProtocolVersion, VariableLengthVec,
    RECORD_HEADER_LEN,
};
use crate::tls::ReadableFromStream;
use tlsprobe_macros::ReadableFromStream;

/// https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.3
///
/// The derived reader covers the body; [`ServerHello::from_record`] deals
/// with the record and handshake framing around it.
#[derive(Debug, ReadableFromStream)]
pub struct ServerHello {
    pub server_version: ProtocolVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cipher_suite: CipherSuite,
    pub compression_method: CompressionMethod,
    pub extensions: VariableLengthVec<Extension, 0, 65535>,
}

impl ServerHello {
    /// Parses a full handshake record whose tag must be `server_hello` (2).
    pub fn from_record(record: &[u8]) -> Result<ServerHello> {
        let mut stream = ByteStream::new(record);

        stream.skip(RECORD_HEADER_LEN)?;
        HandshakeType::ServerHello.expect(&mut stream)?;
        // handshake length; redundant with the record length, not cross-checked
        stream.skip(3)?;

        Self::read(&mut stream)
    }
}
