/// Lowercase hex rendering for byte slices, used when logging randoms,
/// certificates and DH parameters.
pub trait HexDisplay {
    fn hex(&self) -> String;
}

impl HexDisplay for [u8] {
    fn hex(&self) -> String {
        self.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
