use super::{extension_type, Extension};
use crate::tls::error::Result;
use crate::tls::record::VariableLengthVec;
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// One entry of a ServerNameList: name type (0 = host_name) and the
/// length-prefixed hostname. Hostnames are assumed ASCII; no further
/// validation happens here.
#[derive(Debug, ReadableFromStream, WritableToSink)]
pub struct ServerName {
    pub name_type: u8,
    pub host_name: VariableLengthVec<u8, 1, 65535>,
}

pub const NAME_TYPE_HOST_NAME: u8 = 0;

#[derive(Debug, ReadableFromStream, WritableToSink)]
pub(super) struct ServerNameList {
    pub names: VariableLengthVec<ServerName, 1, 65535>,
}

impl Extension {
    /// The server_name extension for a single hostname.
    pub fn server_name(hostname: &str) -> Result<Extension> {
        let list = ServerNameList {
            names: vec![ServerName {
                name_type: NAME_TYPE_HOST_NAME,
                host_name: hostname.as_bytes().to_vec().into(),
            }]
            .into(),
        };

        Extension::from_payload(extension_type::SERVER_NAME, &list)
    }
}
