//! # Hashing Utilities
//!
//! The three digests the protocol is built on:
//!
//! - **SHA3-256**: transaction hashes, address checksums, id derivation.
//! - **SHA3-512**: key expansion and the signature scheme's internal hash.
//! - **RIPEMD-160**: the 20-byte account digest inside an address.
//!
//! All three return fixed-size arrays so the sizes propagate through the
//! callers' types.

use ripemd::Ripemd160;
use sha3::{Digest, Sha3_256, Sha3_512};

/// SHA3-256 of `data`.
///
/// # Example
///
/// ```
/// use nem2_sdk::crypto::sha3_256;
///
/// let hash = sha3_256(b"catapult");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// SHA3-256 over several slices, without concatenating them first.
pub fn sha3_256_parts(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// SHA3-512 of `data`.
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha3_512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_known_vectors() {
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
        assert_eq!(
            hex::encode(sha3_256(b"abc")),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn sha3_256_parts_matches_concatenation() {
        let parts = [b"ab".as_slice(), b"".as_slice(), b"c".as_slice()];
        assert_eq!(sha3_256_parts(&parts), sha3_256(b"abc"));
    }

    #[test]
    fn sha3_512_known_vector() {
        assert_eq!(
            hex::encode(sha3_512(b"abc")),
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        );
    }

    #[test]
    fn ripemd160_known_vectors() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
        assert_eq!(
            hex::encode(ripemd160(b"abc")),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
    }

    #[test]
    fn different_inputs_give_different_digests() {
        assert_ne!(sha3_256(b"a"), sha3_256(b"b"));
        assert_ne!(sha3_512(b"a"), sha3_512(b"b"));
        assert_ne!(ripemd160(b"a"), ripemd160(b"b"));
    }
}
