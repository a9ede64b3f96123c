use crate::tls::record::VariableLengthVec;
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// Session id with its 1-byte length prefix. This client never resumes
/// sessions, so the outbound value is always empty; inbound values are kept
/// as the server sent them.
#[derive(Debug, ReadableFromStream, WritableToSink)]
pub struct SessionId(pub VariableLengthVec<u8, 0, 255>);

impl SessionId {
    pub fn new_empty() -> Self {
        SessionId(VariableLengthVec::new_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
