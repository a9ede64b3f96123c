use crate::tls::error::Result;
use crate::tls::record::VariableLengthVec;
use crate::tls::WritableToSink;
use std::fmt::{Debug, Formatter};
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// Extension type codes this client emits. Inbound extensions are kept as
/// raw (type, value) pairs and never interpreted, so no enum is needed.
pub mod extension_type {
    pub const SERVER_NAME: u16 = 0;
    pub const SIGNATURE_ALGORITHMS: u16 = 13;
    pub const APPLICATION_LAYER_PROTOCOL_NEGOTIATION: u16 = 16;
}

/// A hello extension: `[type:2][length:2][value]`.
#[derive(ReadableFromStream, WritableToSink, Clone, PartialEq)]
pub struct Extension {
    pub extension_type: u16,
    pub extension_data: VariableLengthVec<u8, 0, 65535>,
}

impl Extension {
    /// Builds an extension of `extension_type` whose value is the encoding
    /// of `payload`.
    pub(super) fn from_payload(extension_type: u16, payload: &impl WritableToSink) -> Result<Self> {
        let mut data: Vec<u8> = Vec::new();
        payload.write(&mut data)?;

        Ok(Extension {
            extension_type,
            extension_data: data.into(),
        })
    }
}

impl Debug for Extension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self.extension_type {
            extension_type::SERVER_NAME => "server_name",
            extension_type::SIGNATURE_ALGORITHMS => "signature_algorithms",
            extension_type::APPLICATION_LAYER_PROTOCOL_NEGOTIATION => "alpn",
            _ => "unknown",
        };
        write!(
            f,
            "Extension {}({}), {} byte(s)",
            name,
            self.extension_type,
            self.extension_data.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::record::ByteStream;
    use crate::tls::ReadableFromStream;

    #[test]
    fn inbound_extensions_decode_generically() {
        // renegotiation_info (0xff01) with a 1-byte value, then a truncated-free
        // second extension with an empty value
        let bytes = [0xff, 0x01, 0x00, 0x01, 0x00, 0x00, 0x17, 0x00, 0x00];
        let mut stream = ByteStream::new(&bytes);

        let list = VariableLengthVec::<Extension, 0, 65535>::read(&mut ByteStream::new(
            &[&[0x00, 0x09], &bytes[..]].concat(),
        ))
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].extension_type, 0xff01);
        assert_eq!(*list[0].extension_data, vec![0x00]);
        assert_eq!(list[1].extension_type, 0x0017);
        assert!(list[1].extension_data.is_empty());

        // the same bytes parse one-by-one as well
        let first = Extension::read(&mut stream).unwrap();
        assert_eq!(first.extension_type, 0xff01);
    }
}
