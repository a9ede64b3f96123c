use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TlsError>;

/// Errors that abort the current handshake attempt. Unrecognized record or
/// handshake types are deliberately absent: the dispatcher logs and skips
/// those without failing, since future TLS messages must not hard-fail a
/// client.
#[derive(Debug, Error)]
pub enum TlsError {
    /// A parser was handed a record whose handshake-type tag does not match
    /// the message it decodes.
    #[error("unexpected handshake type: expected {expected}, got {found}")]
    UnexpectedHandshakeType { expected: u8, found: u8 },

    /// Fewer bytes were available than a fixed-format field requires.
    #[error("truncated input: needed {needed} byte(s), {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    /// A length prefix violated the bounds of its TLS vector.
    #[error("length {length} is outside of the permitted range {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },

    /// An enum tag on the wire had no representable variant.
    #[error("no valid value of {what}: {value}")]
    UnknownValue { what: &'static str, value: u64 },

    /// A big-endian byte sequence longer than 6 bytes would need arbitrary
    /// precision instead of a u64.
    #[error("a {length}-byte integer does not safely fit into 64 bits")]
    NumberOverflow { length: usize },

    /// The server sent a second ServerHello within one handshake.
    #[error("server hello received twice")]
    DuplicateServerHello,

    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
}
