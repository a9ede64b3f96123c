use crate::tls::error::{Result, TlsError};
use crate::tls::record::{ByteStream, VariableLengthVec};
use crate::tls::{ReadableFromStream, Sink, WritableToSink};
use tlsprobe_macros::{IntoRepr, ReadableFromStream, WritableToSink};

/// Hash algorithm ids from RFC 5246 §7.4.1.4.1. Ids this client does not know
/// are carried through in `Unknown`, since the server may sign with anything.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoRepr)]
pub enum HashAlgorithm {
    None = 0,
    Md5 = 1,
    Sha1 = 2,
    Sha224 = 3,
    Sha256 = 4,
    Sha384 = 5,
    Sha512 = 6,
    Unknown(u8) = 255,
}

impl From<u8> for HashAlgorithm {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Md5,
            2 => Self::Sha1,
            3 => Self::Sha224,
            4 => Self::Sha256,
            5 => Self::Sha384,
            6 => Self::Sha512,
            v => Self::Unknown(v),
        }
    }
}

impl ReadableFromStream for HashAlgorithm {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        Ok(Self::from(u8::read(stream)?))
    }
}

impl WritableToSink for HashAlgorithm {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        match self {
            Self::Unknown(v) => Err(TlsError::UnknownValue {
                what: "HashAlgorithm",
                value: *v as u64,
            }),
            _ => {
                let repr: u8 = self.into();
                repr.write(buffer)
            }
        }
    }
}

/// Signature algorithm ids from RFC 5246 §7.4.1.4.1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoRepr)]
pub enum SignatureAlgorithm {
    Anonymous = 0,
    Rsa = 1,
    Dsa = 2,
    Ecdsa = 3,
    Unknown(u8) = 255,
}

impl From<u8> for SignatureAlgorithm {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Anonymous,
            1 => Self::Rsa,
            2 => Self::Dsa,
            3 => Self::Ecdsa,
            v => Self::Unknown(v),
        }
    }
}

impl ReadableFromStream for SignatureAlgorithm {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        Ok(Self::from(u8::read(stream)?))
    }
}

impl WritableToSink for SignatureAlgorithm {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        match self {
            Self::Unknown(v) => Err(TlsError::UnknownValue {
                what: "SignatureAlgorithm",
                value: *v as u64,
            }),
            _ => {
                let repr: u8 = self.into();
                repr.write(buffer)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableFromStream, WritableToSink)]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

/// A digitally-signed struct as it appears in ServerKeyExchange. The
/// signature is kept opaque; verifying it is out of scope.
#[derive(Debug, Clone, ReadableFromStream)]
pub struct DigitallySigned {
    pub algorithm: SignatureAndHashAlgorithm,
    pub signature: VariableLengthVec<u8, 0, 65535>,
}
