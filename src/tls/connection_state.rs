use crate::tls::record::CompressionMethod;

/// Which side of the connection this state describes. Only the client end
/// exists in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEnd {
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrfAlgorithm {
    TlsPrfSha256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkCipherAlgorithm {
    Rc4,
    TripleDes,
    Aes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacAlgorithm {
    HmacMd5,
    HmacSha1,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

/// The mutable session context of one handshake attempt, owned exclusively
/// by the driver and updated as messages are parsed.
///
/// The bulk cipher, MAC and master secret stay unset for the whole life of
/// this client: negotiating them requires completing the key exchange, which
/// this crate stops short of.
#[derive(Debug)]
pub struct ConnectionState {
    pub entity: ConnectionEnd,
    pub prf_algorithm: PrfAlgorithm,
    pub bulk_cipher_algorithm: Option<BulkCipherAlgorithm>,
    pub mac_algorithm: Option<MacAlgorithm>,
    pub compression_algorithm: Option<CompressionMethod>,
    pub master_secret: Option<[u8; 48]>,
    pub client_random: Option<[u8; 32]>,
    pub server_random: Option<[u8; 32]>,
}

impl ConnectionState {
    pub fn new() -> Self {
        ConnectionState {
            entity: ConnectionEnd::Client,
            prf_algorithm: PrfAlgorithm::TlsPrfSha256,
            bulk_cipher_algorithm: None,
            mac_algorithm: None,
            compression_algorithm: None,
            master_secret: None,
            client_random: None,
            server_random: None,
        }
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::new()
    }
}
