//! # Digital Signatures
//!
//! Free-function entry points for signing and verification. Every signature
//! the SDK produces (transactions, cosignatures) goes through [`sign`], so
//! there is one place to audit.

use super::keys::{KeyPair, PublicKey, Signature};
use crate::error::Result;

/// Signs `message` with `keypair`.
///
/// # Example
///
/// ```
/// use nem2_sdk::crypto::{sign, verify, KeyPair};
///
/// let keypair = KeyPair::generate();
/// let signature = sign(&keypair, b"announce");
/// assert!(verify(keypair.public_key(), b"announce", &signature));
/// ```
pub fn sign(keypair: &KeyPair, message: &[u8]) -> Signature {
    keypair.sign(message)
}

/// Verifies `signature` over `message`. `false` covers both a bad signature
/// and a public key that is not a curve point.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    public_key.verify(message, signature)
}

/// Verification over raw wire bytes, e.g. a slice of a received payload.
pub fn verify_raw(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let public_key = PublicKey::from_slice(public_key)?;
    let signature = Signature::from_slice(signature)?;
    Ok(public_key.verify(message, &signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify() {
        let kp = KeyPair::generate();
        let sig = sign(&kp, b"message");
        assert!(verify(kp.public_key(), b"message", &sig));
        assert!(!verify(kp.public_key(), b"other", &sig));
    }

    #[test]
    fn verify_raw_checks_lengths() {
        let kp = KeyPair::generate();
        let sig = sign(&kp, b"message");
        assert!(verify_raw(kp.public_key().as_bytes(), b"message", sig.as_bytes()).unwrap());
        assert!(verify_raw(&[0u8; 31], b"message", sig.as_bytes()).is_err());
        assert!(verify_raw(kp.public_key().as_bytes(), b"message", &[0u8; 10]).is_err());
    }
}
