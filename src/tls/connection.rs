use crate::tls::connection_state::ConnectionState;
use crate::tls::error::{Result, TlsError};
use crate::tls::record::{
    Asn1Cert, ByteStream, CipherSuite, ClientHello, ContentType, Handshake, HandshakeType, Random,
    RecordHeader, ServerCertificate, ServerHello, ServerKeyExchange, RECORD_HEADER_LEN,
};
use crate::transport::{TcpTransport, Transport};
use crate::util::HexDisplay;
use log::{debug, warn};

/// Offset of the handshake-type tag inside a handshake record.
const HANDSHAKE_TYPE_OFFSET: usize = RECORD_HEADER_LEN;

/// Drives one TLS 1.2 handshake attempt over a [`Transport`]: sends the
/// ClientHello and parses the server's reply records into the connection
/// state. The handshake is never completed — no key exchange, no Finished —
/// so a session ends after the server's first flight.
pub struct TlsClient<T: Transport = TcpTransport> {
    hostname: String,
    transport: T,
    state: ConnectionState,
    cipher_suite: Option<CipherSuite>,
    certificates: Option<Vec<Asn1Cert>>,
    /// Inbound bytes not yet forming a complete record. A record may arrive
    /// split across any number of deliveries; it is dispatched once its
    /// declared length is buffered.
    pending: Vec<u8>,
}

impl TlsClient<TcpTransport> {
    /// A client over plain TCP, not yet connected.
    pub fn open(hostname: impl Into<String>, port: u16) -> Self {
        let hostname = hostname.into();
        let transport = TcpTransport::new(hostname.clone(), port);
        Self::new(hostname, transport)
    }
}

impl<T: Transport> TlsClient<T> {
    pub fn new(hostname: impl Into<String>, transport: T) -> Self {
        TlsClient {
            hostname: hostname.into(),
            transport,
            state: ConnectionState::new(),
            cipher_suite: None,
            certificates: None,
            pending: Vec::new(),
        }
    }

    /// Connects the transport and sends the ClientHello, in that order.
    pub fn connect(&mut self) -> Result<()> {
        self.transport.connect()?;
        debug!("connected to {}", self.hostname);
        self.send_client_hello()
    }

    fn send_client_hello(&mut self) -> Result<()> {
        let random = Random::generate();
        // invariant: the client random is in place before the first write
        self.state.client_random = Some(random.to_bytes());

        let hello = ClientHello::new(&self.hostname, random)?;
        let record = Handshake::new(HandshakeType::ClientHello, hello).to_record()?;

        self.transport.write(&record)?;
        debug!("sent ClientHello, {} byte(s)", record.len());
        Ok(())
    }

    /// Receives until the peer closes the connection, feeding every chunk to
    /// the record dispatcher.
    pub fn run(&mut self) -> Result<()> {
        let mut buf = [0u8; 16 * 1024];

        loop {
            let n = self.transport.receive(&mut buf)?;
            if n == 0 {
                return Ok(());
            }
            self.process_incoming(&buf[..n])?;
        }
    }

    /// Feeds one inbound chunk to the dispatcher. The chunk may contain any
    /// number of complete records plus at most one partial trailing record,
    /// which stays buffered for the next delivery.
    pub fn process_incoming(&mut self, chunk: &[u8]) -> Result<()> {
        self.pending.extend_from_slice(chunk);

        loop {
            if self.pending.len() < RECORD_HEADER_LEN {
                return Ok(());
            }

            let header = RecordHeader::read(&mut ByteStream::new(&self.pending))?;
            if self.pending.len() < header.total_len() {
                return Ok(());
            }

            let record: Vec<u8> = self.pending.drain(..header.total_len()).collect();
            self.handle_record(&header, &record)?;
        }
    }

    fn handle_record(&mut self, header: &RecordHeader, record: &[u8]) -> Result<()> {
        match ContentType::from_byte(header.content_type) {
            Some(ContentType::Handshake) => self.handle_handshake(record),
            _ => {
                // not fatal: unknown record kinds must not kill the handshake
                warn!("skipping unsupported record: {:?}", header);
                Ok(())
            }
        }
    }

    fn handle_handshake(&mut self, record: &[u8]) -> Result<()> {
        if record.len() <= HANDSHAKE_TYPE_OFFSET {
            warn!("handshake record with empty body, skipping");
            return Ok(());
        }

        match record[HANDSHAKE_TYPE_OFFSET] {
            2 => {
                let server_hello = ServerHello::from_record(record)?;
                self.apply_server_hello(server_hello)
            }
            11 => {
                let server_certificate = ServerCertificate::from_record(record)?;
                debug!(
                    "received {} certificate(s)",
                    server_certificate.certificates.len()
                );
                self.certificates = Some(server_certificate.certificates);
                Ok(())
            }
            12 => {
                // parsed for its contents but not persisted: the key exchange
                // itself is out of scope
                let ske = ServerKeyExchange::from_record(record)?;
                debug!(
                    "received ServerKeyExchange: p {} byte(s), g {}, Ys {} byte(s), signed {:?}",
                    ske.params.dh_p.len(),
                    ske.params.dh_g.hex(),
                    ske.params.dh_ys.len(),
                    ske.signed_params.algorithm,
                );
                Ok(())
            }
            other => {
                warn!("unsupported handshake type {}, skipping record", other);
                Ok(())
            }
        }
    }

    fn apply_server_hello(&mut self, server_hello: ServerHello) -> Result<()> {
        if self.state.server_random.is_some() {
            return Err(TlsError::DuplicateServerHello);
        }

        debug!(
            "received ServerHello: {}, suite {:?}, {} extension(s)",
            server_hello.server_version,
            server_hello.cipher_suite,
            server_hello.extensions.len()
        );

        self.state.server_random = Some(server_hello.random.to_bytes());
        self.state.compression_algorithm = Some(server_hello.compression_method);
        self.cipher_suite = Some(server_hello.cipher_suite);
        Ok(())
    }

    /// Ends the transport. A failed handshake is terminal for the attempt;
    /// there are no retries.
    pub fn close(&mut self) -> Result<()> {
        self.transport.end()?;
        Ok(())
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn cipher_suite(&self) -> Option<CipherSuite> {
        self.cipher_suite
    }

    pub fn certificates(&self) -> Option<&[Asn1Cert]> {
        self.certificates.as_deref()
    }
}
