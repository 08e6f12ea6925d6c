//! # Addresses
//!
//! An address is 25 raw bytes derived from a public key:
//!
//! ```text
//! public_key (32 bytes)
//!     -> SHA3-256                         32 bytes
//!     -> RIPEMD-160                       20 bytes
//!     -> network byte ++ digest           21 bytes
//!     -> ++ SHA3-256(previous)[0..4]      25 bytes
//!     -> base32                           40 characters
//! ```
//!
//! The 40-character base32 string is the "plain" form. The "pretty" form
//! groups it in sixes separated by hyphens. The first character always
//! identifies the network.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::network::NetworkType;
use crate::codec::{base32, hex};
use crate::config::{
    ADDRESS_CHECKSUM_LENGTH, ADDRESS_DIGEST_LENGTH, ADDRESS_LENGTH, ADDRESS_PLAIN_LENGTH,
    ADDRESS_PRETTY_GROUP,
};
use crate::crypto::hash::{ripemd160, sha3_256};
use crate::crypto::keys::PublicKey;
use crate::error::{Nem2Error, Result};

/// An account address tagged with its network.
///
/// Two addresses are equal when their plain strings and networks match.
///
/// # Examples
///
/// ```
/// use nem2_sdk::account::{Address, NetworkType};
///
/// let address = Address::from_raw("SDRDGF-TDLLCB-67D4HP-GIMIHP-NSRYRJ-RT7DOB-GWZY").unwrap();
/// assert_eq!(address.network_type(), NetworkType::MijinTest);
/// assert_eq!(address.plain(), "SDRDGFTDLLCB67D4HPGIMIHPNSRYRJRT7DOBGWZY");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    plain: String,
    network_type: NetworkType,
    bytes: [u8; ADDRESS_LENGTH],
}

impl Address {
    /// Parses a plain or pretty address that must belong to `network_type`.
    ///
    /// Hyphens and spaces are stripped and the text is upper-cased first.
    pub fn new(address: &str, network_type: NetworkType) -> Result<Self> {
        let plain = normalize(address);
        let Some(initial) = plain.chars().next() else {
            return Err(Nem2Error::illegal("address must not be empty"));
        };
        if initial != network_type.address_initial() {
            return Err(Nem2Error::illegal(format!(
                "{} Address start with {}",
                network_type.name(),
                network_type.address_initial()
            )));
        }
        if plain.len() != ADDRESS_PLAIN_LENGTH {
            return Err(Nem2Error::illegal(format!(
                "address must be {} characters, got {}",
                ADDRESS_PLAIN_LENGTH,
                plain.len()
            )));
        }
        let decoded = base32::decode(&plain)
            .map_err(|e| Nem2Error::illegal(format!("address must be base32: {}", e.message())))?;
        let bytes = <[u8; ADDRESS_LENGTH]>::try_from(decoded.as_slice())
            .map_err(|_| Nem2Error::illegal("address must decode to 25 bytes"))?;
        if bytes[0] != network_type.value() {
            return Err(Nem2Error::illegal(format!(
                "address version byte {:#04x} does not match {}",
                bytes[0],
                network_type.name()
            )));
        }

        Ok(Self {
            plain,
            network_type,
            bytes,
        })
    }

    /// Parses an address, inferring the network from its first character.
    pub fn from_raw(raw_address: &str) -> Result<Self> {
        let plain = normalize(raw_address);
        let Some(initial) = plain.chars().next() else {
            return Err(Nem2Error::illegal("address must not be empty"));
        };
        let network_type = NetworkType::from_address_initial(initial).map_err(|_| {
            Nem2Error::illegal(format!(
                "address {} has unknown network initial character",
                raw_address
            ))
        })?;
        Self::new(&plain, network_type)
    }

    /// Builds an address from its 25 raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ADDRESS_LENGTH {
            return Err(Nem2Error::illegal(format!(
                "address must be {} bytes, got {}",
                ADDRESS_LENGTH,
                bytes.len()
            )));
        }
        Self::from_raw(&base32::encode(bytes))
    }

    /// Builds an address from the hex form of its raw bytes, as nodes send it.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(encoded)?)
    }

    /// Derives the address of `public_key` on `network_type`.
    pub fn from_public_key(public_key: &PublicKey, network_type: NetworkType) -> Self {
        let bytes = derive_bytes(public_key, network_type.value());
        Self {
            plain: base32::encode(&bytes),
            network_type,
            bytes,
        }
    }

    /// Derives an address from a hex-encoded public key.
    pub fn from_public_key_hex(public_key: &str, network_type: NetworkType) -> Result<Self> {
        let public_key = PublicKey::from_hex(public_key)
            .map_err(|e| Nem2Error::illegal(format!("public key is not valid: {}", e.message())))?;
        Ok(Self::from_public_key(&public_key, network_type))
    }

    /// 40-character base32 form.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Plain form grouped by six with hyphens, e.g. `SDRDGF-TDLLCB-...-GWZY`.
    pub fn pretty(&self) -> String {
        self.plain
            .as_bytes()
            .chunks(ADDRESS_PRETTY_GROUP)
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Network the address belongs to.
    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// The 25 raw bytes written into transaction bodies.
    pub fn bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.bytes
    }

    /// Whether the trailing four bytes match the checksum of the first 21.
    ///
    /// Parsing does not require this; it is here for callers that want to
    /// reject typos before announcing a transaction.
    pub fn is_checksum_valid(&self) -> bool {
        let (versioned, checksum) = self.bytes.split_at(1 + ADDRESS_DIGEST_LENGTH);
        sha3_256(versioned)[..ADDRESS_CHECKSUM_LENGTH] == *checksum
    }
}

/// The raw 25-byte derivation shared by every public-key constructor.
fn derive_bytes(public_key: &PublicKey, version: u8) -> [u8; ADDRESS_LENGTH] {
    let digest = ripemd160(&sha3_256(public_key.as_bytes()));

    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[0] = version;
    bytes[1..=ADDRESS_DIGEST_LENGTH].copy_from_slice(&digest);
    let checksum = sha3_256(&bytes[..=ADDRESS_DIGEST_LENGTH]);
    bytes[ADDRESS_DIGEST_LENGTH + 1..].copy_from_slice(&checksum[..ADDRESS_CHECKSUM_LENGTH]);
    bytes
}

fn normalize(address: &str) -> String {
    address
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}, {})", self.plain, self.network_type)
    }
}

impl FromStr for Address {
    type Err = Nem2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_raw(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.plain)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_raw(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
