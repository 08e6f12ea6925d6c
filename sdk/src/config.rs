//! # Protocol Configuration & Constants
//!
//! Every fixed number the serializer depends on lives here. Changing any of
//! them produces payloads the network rejects, so they are not configurable
//! at runtime.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Creation time of the nemesis block, 2016-04-01T00:00:00Z, in Unix seconds.
/// Deadlines are expressed in milliseconds elapsed since this instant.
pub const NEMESIS_EPOCH_SECS: i64 = 1_459_468_800;

/// Default time-to-live for a freshly built transaction.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(60 * 60);

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Private key (seed) length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of the expanded signing key derived from the seed.
pub const EXPANDED_KEY_LENGTH: usize = 64;

/// Signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Transaction hash length (SHA3-256).
pub const HASH_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Raw address: version byte + RIPEMD-160 digest + 4-byte checksum.
pub const ADDRESS_LENGTH: usize = 25;

/// Length of the RIPEMD-160 digest embedded in an address.
pub const ADDRESS_DIGEST_LENGTH: usize = 20;

/// Length of the trailing checksum.
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;

/// Base32 form of a raw address.
pub const ADDRESS_PLAIN_LENGTH: usize = 40;

/// Characters per hyphen-separated group in the pretty form.
pub const ADDRESS_PRETTY_GROUP: usize = 6;

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Namespaces nest at most this many levels deep.
pub const MAX_NAMESPACE_DEPTH: usize = 3;

// ---------------------------------------------------------------------------
// Transaction Layout
// ---------------------------------------------------------------------------

/// Size prefix + signature + signer that precede the signing bytes.
pub const TRANSACTION_HEADER_SIZE: usize = 4 + SIGNATURE_LENGTH + PUBLIC_KEY_LENGTH;

/// Property count written in every mosaic definition body.
pub const MOSAIC_PROPERTY_COUNT: u8 = 1;

/// Optional-property key announcing the duration in a mosaic definition.
pub const MOSAIC_DURATION_PROPERTY_KEY: u8 = 2;

// ---------------------------------------------------------------------------
// XEM
// ---------------------------------------------------------------------------

/// Namespace owning the network currency.
pub const XEM_NAMESPACE: &str = "nem";

/// Full name of the network currency mosaic.
pub const XEM_FULL_NAME: &str = "nem:xem";

/// Decimal places of XEM. 1 XEM = 1_000_000 micro XEM.
pub const XEM_DIVISIBILITY: u8 = 6;

/// XEM supply at nemesis, in whole XEM.
pub const XEM_INITIAL_SUPPLY: u64 = 8_999_999_999;

/// XEM cannot be re-minted.
pub const XEM_SUPPLY_MUTABLE: bool = false;

/// XEM can be sent between accounts.
pub const XEM_TRANSFERABLE: bool = true;
