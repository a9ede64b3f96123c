use super::extensions::Extension;
use super::{HashAlgorithm, Random, SessionId, SignatureAlgorithm, SignatureAndHashAlgorithm};
use crate::tls::error::Result;
use crate::tls::record::cipher_suite::{CipherSuite, TLS_DHE_RSA_WITH_AES_128_GCM_SHA256};
use crate::tls::record::protocol_version::{ProtocolVersion, TLS1_2};
use crate::tls::record::{CompressionMethod, VariableLengthVec};
use tlsprobe_macros::WritableToSink;

/// https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.2
///
/// Field order is the wire order; the derived writer emits each field in
/// sequence with its length prefix where the type carries one.
#[derive(Debug, WritableToSink)]
pub struct ClientHello {
    pub client_version: ProtocolVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cipher_suites: VariableLengthVec<CipherSuite, 2, 65534>, // 2^16-2
    pub compression_methods: VariableLengthVec<CompressionMethod, 1, 255>, // 2^8-1
    pub extensions: VariableLengthVec<Extension, 0, 65535>,      // 2^16-1
}

/// The fixed signature_algorithms offer, in the order it goes on the wire.
const OFFERED_SIGNATURE_ALGORITHMS: [SignatureAndHashAlgorithm; 3] = [
    SignatureAndHashAlgorithm {
        hash: HashAlgorithm::Sha256,
        signature: SignatureAlgorithm::Rsa,
    },
    SignatureAndHashAlgorithm {
        hash: HashAlgorithm::Sha384,
        signature: SignatureAlgorithm::Rsa,
    },
    SignatureAndHashAlgorithm {
        hash: HashAlgorithm::Sha256,
        signature: SignatureAlgorithm::Ecdsa,
    },
];

impl ClientHello {
    /// A hello for `hostname` offering the single supported cipher suite.
    /// `random` is passed in so the caller can store it in its connection
    /// state before anything is written.
    pub fn new(hostname: &str, random: Random) -> Result<ClientHello> {
        let extensions = vec![
            Extension::server_name(hostname)?,
            Extension::alpn(&["http/1.1"])?,
            Extension::signature_algorithms(&OFFERED_SIGNATURE_ALGORITHMS)?,
        ];

        Ok(ClientHello {
            client_version: TLS1_2,
            random,
            session_id: SessionId::new_empty(),
            cipher_suites: vec![TLS_DHE_RSA_WITH_AES_128_GCM_SHA256].into(),
            compression_methods: vec![CompressionMethod::Null].into(),
            extensions: extensions.into(),
        })
    }
}
