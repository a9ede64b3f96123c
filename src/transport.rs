use std::io;
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};

/// A bidirectional byte-stream transport. The TLS layer only ever connects,
/// writes whole buffers and receives chunks; anything implementing this can
/// carry a handshake, which keeps the handshake core testable without a
/// network.
pub trait Transport {
    fn connect(&mut self) -> io::Result<()>;

    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// Blocks until the peer delivers data. Returns the number of bytes
    /// placed into `buf`; 0 means the peer closed the connection.
    fn receive(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    fn end(&mut self) -> io::Result<()>;
}

/// The one transport implemented in this crate: a plain TCP connection.
pub struct TcpTransport {
    hostname: String,
    port: u16,
    socket: Option<TcpStream>,
}

impl TcpTransport {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        TcpTransport {
            hostname: hostname.into(),
            port,
            socket: None,
        }
    }

    fn socket(&mut self) -> io::Result<&mut TcpStream> {
        self.socket
            .as_mut()
            .ok_or_else(|| io::Error::new(ErrorKind::NotConnected, "not connected"))
    }
}

impl Transport for TcpTransport {
    fn connect(&mut self) -> io::Result<()> {
        let stream = TcpStream::connect((self.hostname.as_str(), self.port))?;
        self.socket = Some(stream);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.socket()?.write_all(data)
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.socket()?.read(buf)
    }

    fn end(&mut self) -> io::Result<()> {
        let result = self.socket()?.shutdown(Shutdown::Both);
        self.socket = None;
        result
    }
}
