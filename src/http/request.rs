use super::Response;
use crate::transport::{TcpTransport, Transport};
use std::fmt::{Display, Formatter};
use std::io;
use std::io::ErrorKind;

const CRLF: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Head,
    Put,
    Delete,
    Options,
    Trace,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
        };
        f.write_str(s)
    }
}

/// A single plain-HTTP request. Serialized as the request line, the Host
/// header, any extra headers, and a blank line; bodies are not supported.
pub struct Request {
    hostname: String,
    port: u16,
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Request {
            hostname: hostname.into(),
            port,
            method: Method::Get,
            path: "/".to_string(),
            headers: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn serialize(&self) -> String {
        let mut request = format!(
            "{} {} HTTP/1.1{}Host:{}{}",
            self.method, self.path, CRLF, self.hostname, CRLF
        );
        for (name, value) in &self.headers {
            request.push_str(&format!("{}: {}{}", name, value, CRLF));
        }
        request.push_str(CRLF);
        request
    }

    /// Connects, sends the request and accumulates the response until its
    /// `content-length` is satisfied or the peer closes the connection.
    pub fn execute(&self) -> io::Result<Response> {
        let mut transport = TcpTransport::new(self.hostname.clone(), self.port);
        self.execute_over(&mut transport)
    }

    pub fn execute_over(&self, transport: &mut impl Transport) -> io::Result<Response> {
        transport.connect()?;
        transport.write(self.serialize().as_bytes())?;

        let mut response = Response::new();
        let mut buf = [0u8; 16 * 1024];

        loop {
            let n = transport.receive(&mut buf)?;
            if n == 0 {
                return Err(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "connection closed before the response was complete",
                ));
            }

            response.append_data(&buf[..n]);
            response.parse_header();

            if response.is_all_received() {
                response.store_body();
                transport.end()?;
                return Ok(response);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_the_request_line_and_host() {
        let request = Request::new("example.com", 80);
        assert_eq!(
            request.serialize(),
            "GET / HTTP/1.1\r\nHost:example.com\r\n\r\n"
        );
    }

    #[test]
    fn extra_headers_come_after_host() {
        let request = Request::new("example.com", 80)
            .method(Method::Head)
            .path("/index.html")
            .header("Accept", "*/*");

        assert_eq!(
            request.serialize(),
            "HEAD /index.html HTTP/1.1\r\nHost:example.com\r\nAccept: */*\r\n\r\n"
        );
    }
}
