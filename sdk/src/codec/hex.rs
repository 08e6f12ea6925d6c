//! Hex helpers on top of the `hex` crate.
//!
//! Encoding is lowercase. Decoding accepts either case and left-pads an
//! odd-length input with a single `0`, so `"e454d465457"` decodes like
//! `"0e454d465457"`.

use crate::error::{Nem2Error, Result};

/// Lowercase hex, two characters per byte.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Uppercase hex, the form used for keys and hashes in node responses.
pub fn encode_upper(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_upper(bytes)
}

/// Decodes a hex string, padding odd-length input on the left.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let result = if text.len() % 2 == 1 {
        hex::decode(format!("0{}", text))
    } else {
        hex::decode(text)
    };
    result.map_err(|e| {
        Nem2Error::illegal(format!("'{}' is not a valid hex string: {}", text, e))
    })
}

/// Decodes into a fixed-size array, failing when the byte length differs.
pub fn decode_array<const N: usize>(text: &str) -> Result<[u8; N]> {
    let bytes = decode(text)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        Nem2Error::illegal(format!(
            "expected {} bytes of hex, got {}",
            N,
            bytes.len()
        ))
    })
}
