//! A from-scratch TLS 1.2 client handshake over raw TCP: record framing,
//! ClientHello construction and handshake-message parsing, with no TLS stack
//! underneath. The handshake is intentionally not completed to an encrypted
//! channel; see `tls::connection`.

pub use transport::{TcpTransport, Transport};

pub mod http;
pub mod tls;
mod transport;
mod util;
