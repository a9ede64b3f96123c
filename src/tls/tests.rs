use crate::tls::connection::TlsClient;
use crate::tls::error::TlsError;
use crate::tls::record::extensions::Extension;
use crate::tls::record::{ByteStream, CipherSuite, VariableLengthVec};
use crate::tls::ReadableFromStream;
use crate::transport::Transport;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// A transport fed from a script of inbound chunks, recording everything the
/// client writes. Stands in for TCP so the handshake core runs without a
/// network.
struct ScriptedTransport {
    deliveries: VecDeque<Vec<u8>>,
    written: Rc<RefCell<Vec<u8>>>,
    connected: bool,
}

impl ScriptedTransport {
    fn new(deliveries: Vec<Vec<u8>>) -> Self {
        ScriptedTransport {
            deliveries: deliveries.into(),
            written: Rc::new(RefCell::new(Vec::new())),
            connected: false,
        }
    }

    /// A handle onto the written bytes, usable after the transport moves
    /// into the client.
    fn written_handle(&self) -> Rc<RefCell<Vec<u8>>> {
        Rc::clone(&self.written)
    }
}

impl Transport for ScriptedTransport {
    fn connect(&mut self) -> io::Result<()> {
        self.connected = true;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        assert!(self.connected, "write before connect");
        self.written.borrow_mut().extend_from_slice(data);
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.deliveries.pop_front() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Ok(0), // peer closed
        }
    }

    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn server_hello_record(random: [u8; 32], suite: u16) -> Vec<u8> {
    let mut body = vec![3, 3];
    body.extend_from_slice(&random);
    body.push(0); // empty session id
    body.extend_from_slice(&suite.to_be_bytes());
    body.push(0); // compression: null
    body.extend_from_slice(&[0, 0]); // no extensions
    frame_handshake(2, body)
}

fn certificate_record(certs: &[&[u8]]) -> Vec<u8> {
    let mut list = Vec::new();
    for cert in certs {
        list.extend_from_slice(&(cert.len() as u32).to_be_bytes()[1..]);
        list.extend_from_slice(cert);
    }
    let mut body = (list.len() as u32).to_be_bytes()[1..].to_vec();
    body.append(&mut list);
    frame_handshake(11, body)
}

fn frame_handshake(msg_type: u8, mut body: Vec<u8>) -> Vec<u8> {
    let mut record = vec![22, 3, 3];
    record.extend_from_slice(&((body.len() + 4) as u16).to_be_bytes());
    record.push(msg_type);
    record.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
    record.append(&mut body);
    record
}

/// Reads the hostname back out of the server_name extension of a serialized
/// ClientHello record.
fn server_name_of(record: &[u8]) -> String {
    let mut stream = ByteStream::new(record);
    stream.skip(9).unwrap(); // record + handshake headers
    stream.skip(2 + 32).unwrap(); // version + random
    let session_id_len = stream.read_number(1).unwrap() as usize;
    stream.skip(session_id_len).unwrap();
    let suites_len = stream.read_number(2).unwrap() as usize;
    stream.skip(suites_len).unwrap();
    let compressions_len = stream.read_number(1).unwrap() as usize;
    stream.skip(compressions_len).unwrap();

    let extensions = VariableLengthVec::<Extension, 0, 65535>::read(&mut stream).unwrap();
    let server_name = extensions
        .iter()
        .find(|e| e.extension_type == 0)
        .expect("no server_name extension");

    // [list len:2][name type:1][host len:2][host]
    let mut value = ByteStream::new(&server_name.extension_data);
    value.skip(2).unwrap();
    assert_eq!(value.read_number(1).unwrap(), 0); // host_name
    let host_len = value.read_number(2).unwrap() as usize;
    String::from_utf8(value.read_bytes(host_len).unwrap().to_vec()).unwrap()
}

#[test]
fn connect_sends_a_client_hello_for_the_hostname() {
    let transport = ScriptedTransport::new(vec![]);
    let written = transport.written_handle();

    let mut client = TlsClient::new("example.com", transport);
    client.connect().unwrap();

    let record = written.borrow().clone();
    assert_eq!(record[0], 22); // handshake record
    assert_eq!(&record[1..3], &[3, 3]);
    assert_eq!(record[5], 1); // client_hello
    assert_eq!(server_name_of(&record), "example.com");

    // the client random was stored before the write, and matches the wire
    let client_random = client.state().client_random.unwrap();
    assert_eq!(&record[11..43], &client_random[..]);
}

#[test]
fn client_hello_carries_hostnames_of_any_length() {
    for hostname in ["a", "example.com", &"n".repeat(255)] {
        let transport = ScriptedTransport::new(vec![]);
        let written = transport.written_handle();

        let mut client = TlsClient::new(hostname, transport);
        client.connect().unwrap();

        assert_eq!(server_name_of(&written.borrow()), hostname);
    }
}

#[test]
fn two_records_in_one_chunk_both_dispatch_in_order() {
    let random = [0x42; 32];
    let der = [0x30, 0x82, 0x01, 0x00];
    let mut chunk = server_hello_record(random, 0x009e);
    chunk.extend_from_slice(&certificate_record(&[&der]));

    let mut client = TlsClient::new("example.com", ScriptedTransport::new(vec![chunk]));
    client.connect().unwrap();
    client.run().unwrap();

    assert_eq!(client.state().server_random, Some(random));
    assert_eq!(client.cipher_suite(), Some(CipherSuite(0x009e)));
    let certs = client.certificates().unwrap();
    assert_eq!(certs.len(), 1);
    assert_eq!(*certs[0].bytes, der.to_vec());
}

#[test]
fn a_record_split_across_deliveries_is_reassembled() {
    let random = [0x07; 32];
    let record = server_hello_record(random, 0x009e);
    let (first, second) = record.split_at(11);

    let mut client = TlsClient::new(
        "example.com",
        ScriptedTransport::new(vec![first.to_vec(), second.to_vec()]),
    );
    client.connect().unwrap();
    client.run().unwrap();

    assert_eq!(client.state().server_random, Some(random));
}

#[test]
fn unknown_content_type_is_skipped_without_error() {
    let stray = vec![0x19, 3, 3, 0, 2, 0xde, 0xad];
    let hello = server_hello_record([1; 32], 0x009e);

    let mut client = TlsClient::new(
        "example.com",
        ScriptedTransport::new(vec![stray.clone(), hello]),
    );
    client.connect().unwrap();

    // the stray record alone changes nothing
    client.process_incoming(&stray).unwrap();
    assert!(client.state().server_random.is_none());

    client.run().unwrap();
    assert_eq!(client.state().server_random, Some([1; 32]));
}

#[test]
fn unknown_handshake_type_is_skipped_without_error() {
    // server_hello_done (14) is not understood by this client
    let done = frame_handshake(14, Vec::new());

    let mut client = TlsClient::new("example.com", ScriptedTransport::new(vec![done]));
    client.connect().unwrap();
    client.run().unwrap();

    assert!(client.state().server_random.is_none());
    assert!(client.certificates().is_none());
}

#[test]
fn a_second_server_hello_aborts_the_handshake() {
    let first = server_hello_record([1; 32], 0x009e);
    let second = server_hello_record([2; 32], 0x009e);

    let mut client = TlsClient::new("example.com", ScriptedTransport::new(vec![first, second]));
    client.connect().unwrap();

    let err = client.run().unwrap_err();
    assert!(matches!(err, TlsError::DuplicateServerHello));
    // the first hello's random stays in place
    assert_eq!(client.state().server_random, Some([1; 32]));
}

#[test]
fn a_malformed_server_hello_leaves_state_untouched() {
    // claims a 64-byte session id but the record ends before it
    let mut body = vec![3u8, 3];
    body.extend_from_slice(&[9; 32]);
    body.push(64);
    let record = frame_handshake(2, body);

    let mut client = TlsClient::new("example.com", ScriptedTransport::new(vec![record]));
    client.connect().unwrap();

    let err = client.run().unwrap_err();
    assert!(matches!(err, TlsError::TruncatedInput { .. }));
    assert!(client.state().server_random.is_none());
    assert!(client.cipher_suite().is_none());
}
