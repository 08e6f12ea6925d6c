//! # Key Management
//!
//! Private keys, public keys, keypairs and signatures for the Ed25519
//! variant the network uses: standard Ed25519 with SHA3-512 everywhere the
//! RFC uses SHA-512 (key expansion, nonce and challenge hashing).
//!
//! ## Key material
//!
//! - A private key is a 32-byte seed, used as-is.
//! - The keypair expands the seed once at construction (SHA3-512, clamp)
//!   and keeps the 64-byte expanded form internally for every signature.
//! - Public keys are any 32 bytes. They are not checked to be valid curve
//!   points until something tries to verify with them.
//!
//! Key bytes are never logged and never printed by `Debug`.

use ed25519_dalek::hazmat::{raw_sign, raw_verify, ExpandedSecretKey};
use ed25519_dalek::{Signature as DalekSignature, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::Sha3_512;
use std::fmt;
use std::str::FromStr;

use super::hash::sha3_512;
use crate::codec::hex;
use crate::config::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::error::{Nem2Error, Result};

fn fixed_bytes<const N: usize>(slice: &[u8], what: &str) -> Result<[u8; N]> {
    <[u8; N]>::try_from(slice).map_err(|_| {
        Nem2Error::illegal(format!(
            "{} must be {} bytes, got {}",
            what,
            N,
            slice.len()
        ))
    })
}

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A 32-byte private key seed.
///
/// Deliberately not `Serialize` and not `Display`. Exporting a secret
/// should be an explicit call to [`to_hex`](Self::to_hex).
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: [u8; PRIVATE_KEY_LENGTH],
}

impl PrivateKey {
    /// Wraps raw seed bytes.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Builds a key from a slice, failing unless it is exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        Ok(Self {
            bytes: fixed_bytes(slice, "private key")?,
        })
    }

    /// Parses a hex-encoded key. Odd-length input is left-padded.
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(text)?)
    }

    /// Fresh seed from the OS random source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.bytes
    }

    /// Upper-case hex of the seed.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A 32-byte public key. Serializes as upper-case hex, the form nodes use.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl PublicKey {
    /// Wraps raw key bytes.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Builds a key from a slice, failing unless it is exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        Ok(Self {
            bytes: fixed_bytes(slice, "public key")?,
        })
    }

    /// Parses a hex-encoded key. Odd-length input is left-padded.
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(text)?)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Upper-case hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }

    /// Checks `signature` over `message` against this key.
    ///
    /// Returns `false` when the key bytes are not a valid curve point.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let dalek_sig = DalekSignature::from_bytes(&signature.bytes);
        raw_verify::<Sha3_512>(&verifying_key, message, &dalek_sig).is_ok()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = Nem2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A detached 64-byte signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl Signature {
    /// Wraps raw signature bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Builds a signature from a slice, failing unless it is exactly 64 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        Ok(Self {
            bytes: fixed_bytes(slice, "signature")?,
        })
    }

    /// Parses a hex-encoded signature.
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(text)?)
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    /// Upper-case hex, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}..)", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// KeyPair
// ---------------------------------------------------------------------------

/// A private key together with its public key and expanded signing key.
///
/// # Examples
///
/// ```
/// use nem2_sdk::crypto::{KeyPair, PrivateKey};
///
/// let private_key = PrivateKey::from_hex(
///     "787225aaff3d2c71f4ffa32d4f19ec4922f3cd869747f267378f81f8e3fcb12d",
/// ).unwrap();
/// let kp = KeyPair::from_private_key(private_key);
/// assert_eq!(
///     kp.public_key().to_hex(),
///     "1026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF37755"
/// );
///
/// let sig = kp.sign(b"hello");
/// assert!(kp.verify(b"hello", &sig));
/// ```
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
    expanded: ExpandedSecretKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Keypair around a fresh random seed.
    pub fn generate() -> Self {
        Self::from_private_key(PrivateKey::generate())
    }

    /// Derives the public key by expanding `private_key` with SHA3-512.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let expanded = ExpandedSecretKey::from_bytes(&sha3_512(private_key.as_bytes()));
        let verifying_key = VerifyingKey::from(&expanded);
        let public_key = PublicKey::from_bytes(verifying_key.to_bytes());
        Self {
            private_key,
            public_key,
            expanded,
            verifying_key,
        }
    }

    /// Parses a hex-encoded private key and derives the pair.
    pub fn from_hex(text: &str) -> Result<Self> {
        Ok(Self::from_private_key(PrivateKey::from_hex(text)?))
    }

    /// The private seed.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The derived public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Signs `message`. Deterministic for a given key and message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let sig = raw_sign::<Sha3_512>(&self.expanded, message, &self.verifying_key);
        Signature::from_bytes(sig.to_bytes())
    }

    /// Verifies `signature` over `message` against this pair's public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let dalek_sig = DalekSignature::from_bytes(signature.as_bytes());
        raw_verify::<Sha3_512>(&self.verifying_key, message, &dalek_sig).is_ok()
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        Self::from_private_key(self.private_key.clone())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair(pub={})", self.public_key.to_hex())
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
