use std::collections::HashMap;

const SEPARATOR: &[u8] = b"\r\n\r\n";

/// Accumulates inbound chunks and splits them into header map and body once
/// enough bytes have arrived. Completion is decided by `content-length`; a
/// response without it never reports complete and is cut off by the peer
/// closing the connection.
pub struct Response {
    receiving_data: Vec<u8>,
    headers: Option<HashMap<String, String>>,
    body: Option<Vec<u8>>,
}

fn find_separator(data: &[u8]) -> Option<usize> {
    data.windows(SEPARATOR.len()).position(|w| w == SEPARATOR)
}

impl Response {
    pub fn new() -> Self {
        Response {
            receiving_data: Vec::new(),
            headers: None,
            body: None,
        }
    }

    pub fn append_data(&mut self, chunk: &[u8]) {
        self.receiving_data.extend_from_slice(chunk);
    }

    /// Parses the header block if it is complete and not yet parsed.
    /// Returns whether the headers were parsed by this call.
    pub fn parse_header(&mut self) -> bool {
        if self.headers.is_some() {
            return false;
        }
        let Some(index) = find_separator(&self.receiving_data) else {
            return false;
        };

        let header_str = String::from_utf8_lossy(&self.receiving_data[..index]).into_owned();
        let headers = header_str
            .split("\r\n")
            .skip(1) // status line
            .filter_map(|row| {
                let (name, value) = row.split_once(':')?;
                Some((name.trim().to_lowercase(), value.trim().to_string()))
            })
            .collect();

        self.headers = Some(headers);
        true
    }

    /// Total expected byte count of the response, known once the headers and
    /// a `content-length` are available.
    pub fn expected_length(&self) -> Option<usize> {
        let headers = self.headers.as_ref()?;
        let index = find_separator(&self.receiving_data)?;
        let length: usize = headers.get("content-length")?.parse().ok()?;
        Some(index + SEPARATOR.len() + length)
    }

    pub fn is_all_received(&self) -> bool {
        match self.expected_length() {
            Some(length) => self.receiving_data.len() >= length,
            None => false,
        }
    }

    /// Splits the body off the accumulated bytes.
    pub fn store_body(&mut self) {
        let index = find_separator(&self.receiving_data).unwrap_or(0);
        self.body = Some(self.receiving_data[index + SEPARATOR.len()..].to_vec());
    }

    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nContent-Type: text/plain\r\n\r\nhello";

    #[test]
    fn parses_headers_lowercased_and_trimmed() {
        let mut response = Response::new();
        response.append_data(RAW);

        assert!(response.parse_header());
        assert!(!response.parse_header()); // only parsed once

        let headers = response.headers().unwrap();
        assert_eq!(headers.get("content-length").unwrap(), "5");
        assert_eq!(headers.get("content-type").unwrap(), "text/plain");
    }

    #[test]
    fn completion_by_content_length() {
        let mut response = Response::new();
        let (first, second) = RAW.split_at(40);

        response.append_data(first);
        response.parse_header();
        assert!(!response.is_all_received());

        response.append_data(second);
        assert!(response.is_all_received());

        response.store_body();
        assert_eq!(response.body().unwrap(), b"hello");
    }

    #[test]
    fn no_content_length_is_never_complete() {
        let mut response = Response::new();
        response.append_data(b"HTTP/1.1 204 No Content\r\nServer: x\r\n\r\n");
        response.parse_header();
        assert!(!response.is_all_received());
    }
}
