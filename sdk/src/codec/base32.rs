//! RFC 4648 base32 over the `A-Z2-7` alphabet.
//!
//! Input is consumed in 5-byte groups, each producing 8 symbols. A trailing
//! partial group is zero-filled and the surplus symbols are replaced by `=`.
//! Decoding is lenient about presentation: `=`, whitespace and hyphens are
//! dropped and lowercase symbols are accepted.

use crate::error::{Nem2Error, Result};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const INVALID: u8 = 0xFF;

/// Symbol value for every ASCII code point, `INVALID` outside the alphabet.
const DECODE_TABLE: [u8; 128] = build_decode_table();

/// Padding characters emitted for a trailing group of `n % 5` bytes.
const PADDING: [usize; 5] = [0, 6, 4, 3, 1];

/// Bytes recovered from a trailing group of `n` symbols.
const PADDING_ADJUSTMENT: [usize; 8] = [0, 1, 1, 1, 2, 3, 3, 4];

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let symbol = ALPHABET[i];
        table[symbol as usize] = i as u8;
        table[symbol.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encodes `bytes` as padded, upper-case base32.
///
/// ```
/// use nem2_sdk::codec::base32;
///
/// assert_eq!(base32::encode(b"Sigma"), "KNUWO3LB");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() + 4) / 5 * 8);

    for chunk in bytes.chunks(5) {
        let mut group = [0u8; 5];
        group[..chunk.len()].copy_from_slice(chunk);

        let padding = PADDING[chunk.len() % 5];
        let symbols = encode_group(&group);
        for &symbol in &symbols[..8 - padding] {
            out.push(ALPHABET[symbol as usize] as char);
        }
        out.extend(std::iter::repeat('=').take(padding));
    }

    out
}

/// Decodes base32 text, ignoring `=`, whitespace and hyphens.
///
/// Fails with [`Nem2Error::IllegalArgument`] naming the first character that
/// is not part of the alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut symbols = Vec::with_capacity(text.len());
    for c in text
        .chars()
        .filter(|c| *c != '=' && *c != '-' && !c.is_whitespace())
    {
        let value = if c.is_ascii() {
            DECODE_TABLE[c as usize]
        } else {
            INVALID
        };
        if value == INVALID {
            return Err(Nem2Error::illegal(format!(
                "'{}' is not a valid base32 character",
                c
            )));
        }
        symbols.push(value);
    }

    let mut out = Vec::with_capacity(symbols.len() * 5 / 8 + 1);
    for chunk in symbols.chunks(8) {
        let mut group = [0u8; 8];
        group[..chunk.len()].copy_from_slice(chunk);

        let decoded = decode_group(&group);
        let take = if chunk.len() == 8 {
            5
        } else {
            PADDING_ADJUSTMENT[chunk.len()]
        };
        out.extend_from_slice(&decoded[..take]);
    }

    Ok(out)
}

/// 40 input bits -> eight 5-bit symbol values.
fn encode_group(group: &[u8; 5]) -> [u8; 8] {
    let bits = group.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
    let mut symbols = [0u8; 8];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        *symbol = ((bits >> (35 - 5 * i)) & 0x1F) as u8;
    }
    symbols
}

/// Eight 5-bit symbol values -> 40 output bits.
fn decode_group(group: &[u8; 8]) -> [u8; 5] {
    let bits = group
        .iter()
        .fold(0u64, |acc, s| (acc << 5) | u64::from(*s & 0x1F));
    let mut bytes = [0u8; 5];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (bits >> (32 - 8 * i)) as u8;
    }
    bytes
}
