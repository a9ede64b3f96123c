use std::fmt::{Debug, Display, Formatter};
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// Protocol version pair as it appears on the wire. TLS 1.2 is `3.3`.
#[derive(ReadableFromStream, WritableToSink, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolVersion {
    pub major: u8,
    pub minor: u8,
}

pub const TLS1_2: ProtocolVersion = ProtocolVersion { major: 3, minor: 3 };

impl ProtocolVersion {
    pub fn is_tls1_2(&self) -> bool {
        *self == TLS1_2
    }
}

impl Display for ProtocolVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.major, self.minor) {
            (3, 1..=4) => write!(f, "TLS 1.{}", self.minor - 1),
            (3, 0) => write!(f, "SSL 3.0"),
            (major, minor) => write!(f, "version {}.{}", major, minor),
        }
    }
}

impl Debug for ProtocolVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
