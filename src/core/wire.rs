// Byte masking and frame padding helpers shared by the handshake and framing layers.
use crate::core::error::{Error, ErrorKind};

pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, Error> {
    if a.len() != b.len() {
        return Err(Error::new(ErrorKind::Usage).with_message(format!(
            "cannot xor slices of different length ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

pub fn align16(value: usize) -> usize {
    (value + 15) & !15
}
