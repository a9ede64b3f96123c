use crate::tls::record::protocol_version::TLS1_2;
use crate::tls::record::{codec, ByteStream, ContentType, RECORD_HEADER_LEN};
use crate::tls::error::{Result, TlsError};
use crate::tls::WritableToSink;
use tlsprobe_macros::IntoRepr;

/// Handshake message tags, as far as this client understands them. The
/// dispatcher treats every other tag as unsupported and skips the record.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoRepr)]
pub enum HandshakeType {
    ClientHello = 1,        // 0x01
    ServerHello = 2,        // 0x02
    Certificate = 11,       // 0x0b
    ServerKeyExchange = 12, // 0x0c
}

impl HandshakeType {
    /// Consumes the 1-byte tag from `stream` and validates it against the
    /// message this parser decodes.
    pub(crate) fn expect(self, stream: &mut ByteStream<'_>) -> Result<()> {
        let expected: u8 = (&self).into();
        let found = stream.read_number(1)? as u8;

        if found == expected {
            Ok(())
        } else {
            Err(TlsError::UnexpectedHandshakeType { expected, found })
        }
    }
}

/// An outbound handshake message together with its record framing.
///
/// Both length fields depend on the encoded body, so the body is serialized
/// first and the headers are laid down around it.
pub struct Handshake<T: WritableToSink> {
    msg_type: HandshakeType,
    body: T,
}

impl<T: WritableToSink> Handshake<T> {
    pub fn new(msg_type: HandshakeType, body: T) -> Self {
        Handshake { msg_type, body }
    }

    /// Full record bytes: record header, handshake header, body.
    pub fn to_record(&self) -> Result<Vec<u8>> {
        let mut body: Vec<u8> = Vec::new();
        self.body.write(&mut body)?;

        // handshake header (type + u24 length) is part of the record body
        let record_body_len = body.len() + 4;
        if record_body_len > u16::MAX as usize {
            return Err(TlsError::LengthOutOfRange {
                length: record_body_len,
                min: 0,
                max: u16::MAX as usize,
            });
        }

        let mut record = Vec::with_capacity(RECORD_HEADER_LEN + record_body_len);
        record.push((&ContentType::Handshake).into());
        TLS1_2.write(&mut record)?;
        (record_body_len as u16).write(&mut record)?;
        record.push((&self.msg_type).into());
        record.extend_from_slice(&codec::number_to_bytes(body.len() as u64, 3));
        record.append(&mut body);

        Ok(record)
    }
}
