pub use byte_stream::ByteStream;
pub use cipher_suite::CipherSuite;
pub use compression_method::CompressionMethod;
pub use handshake::*;
pub use protocol_version::ProtocolVersion;
pub use record_header::{ContentType, RecordHeader, RECORD_HEADER_LEN};
pub use variable_length_vec::VariableLengthVec;

mod byte_stream;
mod cipher_suite;
pub mod codec;
mod compression_method;
mod handshake;
mod protocol_version;
pub(crate) mod readable_from_stream;
mod record_header;
mod variable_length_vec;
pub(crate) mod writable_to_sink;
