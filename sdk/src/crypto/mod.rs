//! # Cryptographic Primitives
//!
//! Hashing, keys and signatures. Everything here is a thin typed wrapper
//! around audited implementations (`sha3`, `ripemd`, `ed25519-dalek`); the
//! only protocol-specific twist is that Ed25519 runs with SHA3-512.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{ripemd160, sha3_256, sha3_512};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use signatures::{sign, verify};
