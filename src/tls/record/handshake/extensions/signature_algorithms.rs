use super::{extension_type, Extension};
use crate::tls::error::Result;
use crate::tls::record::handshake::SignatureAndHashAlgorithm;
use crate::tls::record::VariableLengthVec;
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

#[derive(Debug, ReadableFromStream, WritableToSink)]
pub(super) struct SignatureAlgorithmList {
    pub supported_signature_algorithms: VariableLengthVec<SignatureAndHashAlgorithm, 2, 65534>,
}

impl Extension {
    /// The signature_algorithms extension for the given pairs, in order.
    pub fn signature_algorithms(algorithms: &[SignatureAndHashAlgorithm]) -> Result<Extension> {
        let list = SignatureAlgorithmList {
            supported_signature_algorithms: algorithms.to_vec().into(),
        };

        Extension::from_payload(extension_type::SIGNATURE_ALGORITHMS, &list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::record::handshake::{HashAlgorithm, SignatureAlgorithm};
    use crate::tls::WritableToSink;

    #[test]
    fn layout_for_the_default_offer() {
        let ext = Extension::signature_algorithms(&[
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
        ])
        .unwrap();

        let mut buf = Vec::new();
        ext.write(&mut buf).unwrap();

        assert_eq!(
            buf,
            vec![
                0, 13, // type: signature_algorithms
                0, 8, // extension length
                0, 6, // list length
                4, 1, // sha256 + rsa
                5, 1, // sha384 + rsa
                4, 3, // sha256 + ecdsa
            ]
        );
    }
}
