//! # Codecs
//!
//! Pure encoding helpers shared by the identifier, address and transaction
//! code. None of them keep state.
//!
//! - **base32**: address text form.
//! - **hex**: keys, hashes and JSON byte fields.
//! - **uint64**: the `[low, high]` form 64-bit values take in JSON.

pub mod base32;
pub mod hex;
pub mod uint64;
