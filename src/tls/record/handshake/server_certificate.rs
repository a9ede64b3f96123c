use super::handshake::HandshakeType;
use crate::tls::error::Result;
use crate::tls::record::{ByteStream, ProtocolVersion, VariableLengthVec};
use crate::tls::ReadableFromStream;
use crate::util::HexDisplay;
use std::fmt::{Debug, Formatter};
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// One DER-encoded certificate, kept opaque. 3-byte length prefix within the
/// certificate list.
#[derive(Clone, PartialEq, ReadableFromStream, WritableToSink)]
pub struct Asn1Cert {
    pub bytes: VariableLengthVec<u8, 0, 16777215>, // 2^24-1
}

impl Debug for Asn1Cert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asn1Cert({} bytes, {})", self.bytes.len(), self.bytes.hex())
    }
}

/// The Certificate handshake message. The version pair comes from the record
/// header, since the message body carries none; the first certificate is by
/// convention the leaf.
#[derive(Debug)]
pub struct ServerCertificate {
    pub version: ProtocolVersion,
    pub certificates: Vec<Asn1Cert>,
}

impl ServerCertificate {
    /// Parses a full handshake record whose tag must be `certificate` (11).
    pub fn from_record(record: &[u8]) -> Result<ServerCertificate> {
        let mut stream = ByteStream::new(record);

        stream.skip(1)?; // content type
        let version = ProtocolVersion::read(&mut stream)?;
        stream.skip(2)?; // record length
        HandshakeType::Certificate.expect(&mut stream)?;
        stream.skip(3)?; // handshake length
        stream.skip(3)?; // certificate list length

        let mut certificates = Vec::new();
        while stream.rest_len() > 0 {
            certificates.push(Asn1Cert::read(&mut stream)?);
        }

        Ok(ServerCertificate {
            version,
            certificates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::error::TlsError;

    pub(crate) fn sample_record(certs: &[&[u8]]) -> Vec<u8> {
        let mut list = Vec::new();
        for cert in certs {
            list.extend_from_slice(&(cert.len() as u32).to_be_bytes()[1..]);
            list.extend_from_slice(cert);
        }

        let mut body = (list.len() as u32).to_be_bytes()[1..].to_vec();
        body.append(&mut list);

        let mut record = vec![22, 3, 3];
        record.extend_from_slice(&((body.len() + 4) as u16).to_be_bytes());
        record.push(11); // certificate
        record.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
        record.append(&mut body);
        record
    }

    #[test]
    fn three_certificates_in_order() {
        let der1 = vec![0x30, 0x82, 0x01, 0x0a];
        let der2 = vec![0x30, 0x11];
        let der3 = vec![0x30, 0x03, 0xff];

        let record = sample_record(&[&der1, &der2, &der3]);
        let message = ServerCertificate::from_record(&record).unwrap();

        assert!(message.version.is_tls1_2());
        assert_eq!(message.certificates.len(), 3);
        assert_eq!(*message.certificates[0].bytes, der1);
        assert_eq!(*message.certificates[1].bytes, der2);
        assert_eq!(*message.certificates[2].bytes, der3);
    }

    #[test]
    fn empty_list_parses() {
        let record = sample_record(&[]);
        let message = ServerCertificate::from_record(&record).unwrap();
        assert!(message.certificates.is_empty());
    }

    #[test]
    fn rejects_other_handshake_types() {
        let mut record = sample_record(&[&[1, 2, 3]]);
        record[5] = 2;

        let err = ServerCertificate::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            TlsError::UnexpectedHandshakeType {
                expected: 11,
                found: 2
            }
        ));
    }
}
