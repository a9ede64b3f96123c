use super::readable_from_stream::ReadableFromStream;
use super::writable_to_sink::{Sink, WritableToSink};
use super::ByteStream;
use crate::tls::error::Result;
use std::fmt::{Debug, Formatter};

/// A cipher suite as its raw 16-bit identifier.
///
/// The server's selection is stored verbatim, so this is a newtype instead of
/// an enum: even identifiers we do not know keep their exact value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CipherSuite(pub u16);

/// The single suite this client offers.
pub const TLS_DHE_RSA_WITH_AES_128_GCM_SHA256: CipherSuite = CipherSuite(0x009e);

impl CipherSuite {
    fn name(&self) -> Option<&'static str> {
        match self.0 {
            0x009e => Some("TLS_DHE_RSA_WITH_AES_128_GCM_SHA256"),
            0x009f => Some("TLS_DHE_RSA_WITH_AES_256_GCM_SHA384"),
            0x002f => Some("TLS_RSA_WITH_AES_128_CBC_SHA"),
            0x0035 => Some("TLS_RSA_WITH_AES_256_CBC_SHA"),
            0x003c => Some("TLS_RSA_WITH_AES_128_CBC_SHA256"),
            0x009c => Some("TLS_RSA_WITH_AES_128_GCM_SHA256"),
            _ => None,
        }
    }
}

impl ReadableFromStream for CipherSuite {
    fn read(stream: &mut ByteStream<'_>) -> Result<Self> {
        Ok(CipherSuite(u16::read(stream)?))
    }
}

impl WritableToSink for CipherSuite {
    fn write(&self, buffer: &mut impl Sink) -> Result<()> {
        self.0.write(buffer)
    }
}

impl Debug for CipherSuite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:04x})", name, self.0),
            None => write!(f, "CipherSuite(0x{:04x})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_verbatim() {
        let mut buf = Vec::new();
        CipherSuite(0xcafe).write(&mut buf).unwrap();
        assert_eq!(buf, vec![0xca, 0xfe]);

        let mut stream = ByteStream::new(&buf);
        assert_eq!(CipherSuite::read(&mut stream).unwrap(), CipherSuite(0xcafe));
    }

    #[test]
    fn known_suite_debug_uses_the_name() {
        let rendered = format!("{:?}", TLS_DHE_RSA_WITH_AES_128_GCM_SHA256);
        assert_eq!(rendered, "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 (0x009e)");
    }
}
