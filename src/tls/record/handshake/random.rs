use crate::util::HexDisplay;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt::{Debug, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use tlsprobe_macros::{ReadableFromStream, WritableToSink};

/// The 32-byte handshake random: 4-byte big-endian Unix timestamp in seconds
/// followed by 28 bytes from the OS random source.
#[derive(PartialEq, Eq, Clone, ReadableFromStream, WritableToSink)]
pub struct Random {
    pub gmt_unix_time: u32,
    pub random_bytes: [u8; 28],
}

impl Random {
    pub fn generate() -> Random {
        let gmt_unix_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);

        let mut random_bytes = [0; 28];
        OsRng.fill_bytes(&mut random_bytes);

        Random {
            gmt_unix_time,
            random_bytes,
        }
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        let mut res = [0; 32];
        res[..4].copy_from_slice(&self.gmt_unix_time.to_be_bytes());
        res[4..].copy_from_slice(&self.random_bytes);
        res
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Random {
        let mut random_bytes = [0; 28];
        random_bytes.copy_from_slice(&bytes[4..]);

        Random {
            gmt_unix_time: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            random_bytes,
        }
    }
}

impl Debug for Random {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Random({})", self.to_bytes().hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_layout() {
        let random = Random {
            gmt_unix_time: 0x01020304,
            random_bytes: [0xab; 28],
        };

        let bytes = random.to_bytes();
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[4..], &[0xab; 28]);
        assert_eq!(Random::from_bytes(bytes), random);
    }

    #[test]
    fn generate_sets_the_timestamp() {
        let random = Random::generate();
        // one minute of slack; the point is that the field is seconds, not ms
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as u32;
        assert!(now - random.gmt_unix_time < 60);
    }
}
