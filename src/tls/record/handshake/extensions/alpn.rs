use super::{extension_type, Extension};
use crate::tls::error::Result;
use crate::tls::record::VariableLengthVec;
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// A single ALPN protocol name, 1-byte length prefixed.
#[derive(Debug, ReadableFromStream, WritableToSink)]
pub struct ProtocolName(pub VariableLengthVec<u8, 1, 255>);

#[derive(Debug, ReadableFromStream, WritableToSink)]
pub(super) struct ProtocolNameList {
    pub names: VariableLengthVec<ProtocolName, 2, 65535>,
}

impl Extension {
    /// The application_layer_protocol_negotiation extension. This client
    /// always offers exactly `http/1.1`.
    pub fn alpn(protocols: &[&str]) -> Result<Extension> {
        let list = ProtocolNameList {
            names: protocols
                .iter()
                .map(|p| ProtocolName(p.as_bytes().to_vec().into()))
                .collect::<Vec<_>>()
                .into(),
        };

        Extension::from_payload(extension_type::APPLICATION_LAYER_PROTOCOL_NEGOTIATION, &list)
    }
}
