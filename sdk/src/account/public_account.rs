//! The public half of an account: a public key bound to a network.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::Address;
use super::network::NetworkType;
use crate::crypto::keys::{PublicKey, Signature};
use crate::error::Result;

/// A public key on a specific network. Equality covers both.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccount {
    public_key: PublicKey,
    network_type: NetworkType,
}

impl PublicAccount {
    /// Binds `public_key` to `network_type`.
    pub fn new(public_key: PublicKey, network_type: NetworkType) -> Self {
        Self {
            public_key,
            network_type,
        }
    }

    /// Parses a hex-encoded public key.
    pub fn from_public_key_hex(public_key: &str, network_type: NetworkType) -> Result<Self> {
        Ok(Self::new(PublicKey::from_hex(public_key)?, network_type))
    }

    /// The account's public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The account's network.
    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// The address derived from the public key.
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key, self.network_type)
    }

    /// Checks that `signature` over `data` was produced by this account.
    pub fn verify_signature(&self, data: &[u8], signature: &Signature) -> bool {
        self.public_key.verify(data, signature)
    }
}

impl fmt::Debug for PublicAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicAccount({}, {})", self.public_key, self.network_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::KeyPair;

    const PUBLIC_KEY: &str = "b4f12e7c9f6946091e2cb8b6d3a12b50d17ccbbf646386ea27ce2946a7423dcf";

    #[test]
    fn derives_address() {
        let account = PublicAccount::from_public_key_hex(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
        assert_eq!(account.public_key().to_hex(), PUBLIC_KEY.to_uppercase());
        assert_eq!(account.address().plain(), "SARNASAS2BIAB6LMFA3FPMGBPGIJGK6IJETM3ZSP");
    }

    #[test]
    fn equality_covers_key_and_network() {
        let a = PublicAccount::from_public_key_hex(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
        let b = PublicAccount::from_public_key_hex(PUBLIC_KEY, NetworkType::MijinTest).unwrap();
        let c = PublicAccount::from_public_key_hex(PUBLIC_KEY, NetworkType::MainNet).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn verifies_signatures_from_its_key() {
        let kp = KeyPair::generate();
        let account = PublicAccount::new(*kp.public_key(), NetworkType::Mijin);
        let sig = kp.sign(b"data");
        assert!(account.verify_signature(b"data", &sig));
        assert!(!account.verify_signature(b"tampered", &sig));
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(PublicAccount::from_public_key_hex("zz", NetworkType::Mijin).is_err());
        assert!(PublicAccount::from_public_key_hex("0102", NetworkType::Mijin).is_err());
    }
}
