use super::handshake::HandshakeType;
use super::signature::DigitallySigned;
use crate::tls::error::Result;
use crate::tls::record::{ByteStream, ProtocolVersion, VariableLengthVec};
use crate::tls::ReadableFromStream;
use tlsprobe_macros::ReadableFromStream;

/// Ephemeral Diffie-Hellman parameters: prime, generator and the server's
/// public value, each 2-byte length prefixed. Kept as raw byte strings — a
/// DH prime does not fit a machine integer and no key-exchange computation
/// happens in this client.
#[derive(Debug, Clone, ReadableFromStream)]
pub struct ServerDhParams {
    pub dh_p: VariableLengthVec<u8, 0, 65535>,
    pub dh_g: VariableLengthVec<u8, 0, 65535>,
    pub dh_ys: VariableLengthVec<u8, 0, 65535>,
}

/// https://www.rfc-editor.org/rfc/rfc5246#section-7.4.3 for the DHE case.
/// The signature over the parameters is carried but not verified.
#[derive(Debug)]
pub struct ServerKeyExchange {
    pub version: ProtocolVersion,
    pub params: ServerDhParams,
    pub signed_params: DigitallySigned,
}

impl ServerKeyExchange {
    /// Parses a full handshake record whose tag must be
    /// `server_key_exchange` (12).
    pub fn from_record(record: &[u8]) -> Result<ServerKeyExchange> {
        let mut stream = ByteStream::new(record);

        stream.skip(1)?; // content type
        let version = ProtocolVersion::read(&mut stream)?;
        stream.skip(2)?; // record length
        HandshakeType::ServerKeyExchange.expect(&mut stream)?;
        stream.skip(3)?; // handshake length

        Ok(ServerKeyExchange {
            version,
            params: ServerDhParams::read(&mut stream)?,
            signed_params: DigitallySigned::read(&mut stream)?,
        })
    }
}
