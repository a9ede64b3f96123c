pub use client_hello::ClientHello;
pub use handshake::{Handshake, HandshakeType};
pub use random::Random;
pub use server_certificate::{Asn1Cert, ServerCertificate};
pub use server_hello::ServerHello;
pub use server_key_exchange::{ServerDhParams, ServerKeyExchange};
pub use session_id::SessionId;
pub use signature::{DigitallySigned, HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm};

mod client_hello;
pub mod extensions;
#[allow(clippy::module_inception)]
mod handshake;
mod random;
mod server_certificate;
mod server_hello;
mod server_key_exchange;
mod session_id;
mod signature;
